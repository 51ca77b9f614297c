//! Quote decoration passes over the generated revelation list.
//!
//! Three passes, run in this order around the de-duplication step:
//! multi-citation injection, the legacy phase-1 single-quote pass, and
//! (after de-duplication) the golden-quote guarantee. All selection is
//! seeded from input data; nothing here consults an ambient random
//! source.

use life_clock_core::types::{EnergyProfile, EnergyType, PhaseResult, Revelation, RevelationCategory};

use crate::phases::PHASES;

use super::dedup::{normalize_sentence, DeduplicationPass};
use super::quotes::phase_pool;
use super::rng::{fnv1a_64, XorShift64};

/// Opening markup of a gold quote. The golden-quote pass keys on its
/// presence.
pub const QUOTE_GOLD_OPEN: &str = "<span class=\"quote-gold\">";

/// Maximum growth, in characters, a revelation may gain from citation
/// injection relative to its pre-injection length.
pub const CITATION_GROWTH_BUDGET: usize = 600;

/// Wrap a raw quote in gold markup with typographic quotes.
pub fn wrap_quote(quote: &str) -> String {
    format!("{}“{}”</span>", QUOTE_GOLD_OPEN, quote)
}

/// Number of quotes injected for a category: three for phase and force
/// revelations, two otherwise.
#[inline]
fn citation_count(category: RevelationCategory) -> usize {
    match category {
        RevelationCategory::Phase | RevelationCategory::Force => 3,
        _ => 2,
    }
}

/// Multi-citation injection.
///
/// Per revelation, seeds a generator from `(index, title)`, picks 2–3
/// distinct quotes from the revelation's pool via a seeded shuffle, and
/// splices them: first pick before the first paragraph, second after it,
/// third (phase/force only) appended at the end. Growth is capped at
/// [`CITATION_GROWTH_BUDGET`] characters over the original length,
/// truncating on a char boundary with an ellipsis.
pub fn inject_citations(revelations: &mut [Revelation], pools: &[Vec<&'static str>]) {
    for (index, revelation) in revelations.iter_mut().enumerate() {
        let pool = match pools.get(index) {
            Some(pool) if !pool.is_empty() => pool,
            _ => continue,
        };

        let seed = fnv1a_64(&format!("{}|{}", index, revelation.title));
        let mut rng = XorShift64::new(seed);

        let count = citation_count(revelation.category).min(pool.len());
        let order = rng.permutation(pool.len());
        let picks: Vec<&str> = order.iter().take(count).map(|&i| pool[i]).collect();

        if picks.len() < 2 {
            continue;
        }

        let original_len = revelation.insight.chars().count();
        let paragraphs: Vec<&str> = revelation.insight.split("\n\n").collect();

        let mut rebuilt: Vec<String> = Vec::with_capacity(paragraphs.len() + 3);
        rebuilt.push(wrap_quote(picks[0]));
        rebuilt.push(paragraphs[0].to_string());
        rebuilt.push(wrap_quote(picks[1]));
        for paragraph in &paragraphs[1..] {
            rebuilt.push((*paragraph).to_string());
        }
        if let Some(third) = picks.get(2) {
            rebuilt.push(wrap_quote(third));
        }

        let mut decorated = rebuilt.join("\n\n");
        let budget = original_len + CITATION_GROWTH_BUDGET;
        if decorated.chars().count() > budget {
            decorated = decorated.chars().take(budget).collect();
            decorated.push('…');
        }
        revelation.insight = decorated;
    }
}

/// Signature string over the whole session, used to seed the legacy pass.
fn session_signature(results: &[PhaseResult], profile: &EnergyProfile) -> String {
    let mut signature = String::new();
    for result in results {
        signature.push_str(&format!(
            "{}:{}:{};",
            result.id, result.total, result.archetype
        ));
    }
    for axis in EnergyType::ALL {
        signature.push_str(&format!("{:.2}:", profile.averages.get(axis)));
    }
    signature
}

/// Legacy single-quote distribution pass.
///
/// A second, independent hash seeded by the session signature drives a
/// Fisher–Yates permutation over the revelation indices; revelation `i`
/// is assigned phase-1 quote `perm[i] % len`. The quote is only actually
/// prepended to revelations whose title carries the phase-1 title, so the
/// pass runs uniformly and touches the rest harmlessly.
pub fn legacy_quote_pass(
    revelations: &mut [Revelation],
    results: &[PhaseResult],
    profile: &EnergyProfile,
) {
    let pool = match phase_pool(PHASES[0].id) {
        Some(pool) if !pool.is_empty() => pool,
        _ => return,
    };
    let marker = PHASES[0].title;

    let seed = fnv1a_64(&session_signature(results, profile));
    let mut rng = XorShift64::new(seed);
    let permutation = rng.permutation(revelations.len());

    for (index, revelation) in revelations.iter_mut().enumerate() {
        let quote = pool[permutation[index] % pool.len()];
        if revelation.title.contains(marker) {
            revelation.insight = format!("{}\n\n{}", wrap_quote(quote), revelation.insight);
        }
    }
}

/// Golden-quote guarantee.
///
/// Any revelation still lacking gold markup after de-duplication gets one
/// quote from its pool, seeded from its post-dedup body. Quotes whose
/// normalized form is already in the global seen-set are skipped; the
/// pool's first quote is the fallback when no unique option exists. The
/// chosen quote's normalized form joins the seen-set so later revelations
/// cannot repeat it.
pub fn ensure_golden_quotes(
    revelations: &mut [Revelation],
    pools: &[Vec<&'static str>],
    dedup: &mut DeduplicationPass,
) {
    for (index, revelation) in revelations.iter_mut().enumerate() {
        if revelation.insight.contains(QUOTE_GOLD_OPEN) {
            continue;
        }
        let pool = match pools.get(index) {
            Some(pool) if !pool.is_empty() => pool,
            _ => continue,
        };

        let mut rng = XorShift64::new(fnv1a_64(&revelation.insight));
        let order = rng.permutation(pool.len());
        let chosen = order
            .iter()
            .map(|&i| pool[i])
            .find(|quote| !dedup.contains(&normalize_sentence(quote)))
            .unwrap_or(pool[0]);

        dedup.insert(normalize_sentence(chosen));
        revelation.insight = format!("{}\n\n{}", revelation.insight, wrap_quote(chosen));
    }
}
