//! Static force narratives, keyed by phase id and force role.
//!
//! Every phase id 1..=10 carries entries for all three force roles; the
//! 10×3 completeness is a data invariant covered by exhaustive tests, not
//! by runtime guards.

use life_clock_core::types::ForceType;

/// Canned narrative for one (phase, force role) pair.
#[derive(Debug, Clone, Copy)]
pub struct ForceNarrative {
    /// Force card title.
    pub title: &'static str,
    /// What this force means, one sentence.
    pub description: &'static str,
    /// Longer insight paragraph.
    pub insight: &'static str,
    /// Suggested action.
    pub action: &'static str,
}

const fn n(
    title: &'static str,
    description: &'static str,
    insight: &'static str,
    action: &'static str,
) -> ForceNarrative {
    ForceNarrative {
        title,
        description,
        insight,
        action,
    }
}

/// Narratives per phase, in role order [Shadow, Fear, Power].
static FORCE_TABLE: [[ForceNarrative; 3]; 10] = [
    // Phase 1: Origins
    [
        n(
            "The Buried Root",
            "Your origins are the least nourished part of your life.",
            "What was never examined from your beginnings still writes rules for your present. The energy you spend keeping the first chapter closed is energy the rest of the book never receives.",
            "Write down three scenes from childhood you never talk about.",
        ),
        n(
            "The Echo of Home",
            "Your past is the place you most brace against.",
            "The near-lowest score in Origins reads as a flinch: the old house still has rooms you walk around. Fear of what the past might say keeps it saying the same thing.",
            "Ask one family member a question you've never dared to ask.",
        ),
        n(
            "The Deep Root",
            "Your origins are your strongest current.",
            "You stand on examined ground. Because you know where you come from, very little can convince you that you are someone else; this is the quiet engine under your other strengths.",
            "Tell the story of your roots to someone who needs their own.",
        ),
    ],
    // Phase 2: Learning
    [
        n(
            "The Shuttered Mind",
            "Learning is where your life currently leaks the most.",
            "Unaudited beliefs and unexamined mistakes compound like neglected debt. The door to the library is unlocked; the shadow is that you have stopped reaching for the handle.",
            "Choose one strong opinion and spend an evening arguing against it.",
        ),
        n(
            "The Fear of Being Wrong",
            "Being mistaken is the exposure you most avoid.",
            "The second-lowest score in Learning usually means error feels like indictment. Until being wrong is survivable, every new idea arrives as a threat instead of a delivery.",
            "Say 'I don't know' out loud once this week, and enjoy it.",
        ),
        n(
            "The Compounding Mind",
            "Your mind is your strongest asset and it knows how to grow.",
            "You revise, capture, and keep receipts for what you believe. Knowledge in your hands compounds, which means time is on your side in a way it is for very few people.",
            "Pick the one subject you'd study for a year, and begin it.",
        ),
    ],
    // Phase 3: Action
    [
        n(
            "The Stalled Engine",
            "Execution is the weakest span in your bridge.",
            "Decisions that never reach your hands turn into a private museum of intentions. The shadow is not laziness; it is a will that was never given a structure to lean on.",
            "Do the smallest avoided task tomorrow before anything else.",
        ),
        n(
            "The Fear of Starting",
            "Beginnings are where your courage thins.",
            "The near-lowest Action score points at the first step, not the staircase. What you call waiting for the right moment is the moment waiting for you.",
            "Set a two-minute timer and start the thing badly.",
        ),
        n(
            "The Iron Word",
            "Your capacity to act is the strongest thing you own.",
            "Your promises to yourself hold under weather that cancels other people's plans. Aim this reliability deliberately; an engine this strong deserves a destination.",
            "Take on one commitment that genuinely frightens you.",
        ),
    ],
    // Phase 4: Bonds
    [
        n(
            "The Walled Garden",
            "Closeness is the nourishment you most deny yourself.",
            "The walls were built by a younger you for good reasons that have expired. What keeps out the old harm now keeps out the present warmth, and the garden inside is thirsty.",
            "Tell one person one true thing you've been withholding.",
        ),
        n(
            "The Fear of Being Seen",
            "Being fully known is the risk you circle and avoid.",
            "A near-lowest Bonds score is rarely about other people; it is the suspicion that the unedited you would not be kept. That suspicion has never actually been tested.",
            "Let someone see one unpolished corner of your life this week.",
        ),
        n(
            "The Standing Bridge",
            "Your bonds are the strongest structure in your life.",
            "You repair, you say the words, you let care in. People can build on you, and they know it; this is wealth that compounds in a currency no market tracks.",
            "Write the letter you'd want read at the end, and send it now.",
        ),
    ],
    // Phase 5: Meaning
    [
        n(
            "The Unasked Question",
            "Purpose is the room of your house with the lights off.",
            "Days spent on inertia belong to whoever set the schedule, and it was not you. The shadow is not emptiness; it is a why that has never been given an appointment.",
            "Block one hour this week for the question you keep postponing.",
        ),
        n(
            "The Fear of the Answer",
            "You avoid the why because it might demand changes.",
            "The second-lowest score in Meaning suggests the question is audible and being declined. The cost of hearing the answer is real; the cost of not hearing it is your days.",
            "Finish this sentence in writing: 'If I'm honest, my life wants…'",
        ),
        n(
            "The Burning Why",
            "Meaning is your strongest fuel and it is lit.",
            "Your hours and your values largely agree, which makes your persistence cheap where other people's is expensive. A clear why converts obstacles into terrain.",
            "Recruit one person into what matters to you; meaning shared doubles.",
        ),
    ],
    // Phase 6: Ambition
    [
        n(
            "The Cold Forge",
            "Your ambition is the furnace you never light.",
            "Unwritten goals and untaken risks keep the forge cold while the ore waits. The shadow is not absence of fire; it is fire held so carefully it cannot catch.",
            "Write one five-year ambition tonight and one step for tomorrow.",
        ),
        n(
            "The Fear of the Arena",
            "Competition and judgment are the heat you avoid.",
            "A near-lowest Ambition score often means the audience in your head reviews harsher than any real one. Avoided arenas still charge admission; you are paying it in postponement.",
            "Enter one small contest, pitch, or application this month.",
        ),
        n(
            "The Summit Engine",
            "Your ambition is your strongest and cleanest force.",
            "You work from a picture of the future and let results do your arguing. Drive like this bends circumstances; the only real risk left is aiming it at too small a mountain.",
            "Raise one current goal by an order of magnitude and replan.",
        ),
    ],
    // Phase 7: Compassion
    [
        n(
            "The Rationed Heart",
            "Kindness is the account you keep most tightly closed.",
            "Mercy behind glass helps no one, including its owner. The shadow is a generosity that exists fully formed and almost entirely undelivered.",
            "Perform one anonymous kindness within three days.",
        ),
        n(
            "The Fear of Softness",
            "You treat tenderness as a vulnerability others might invoice.",
            "The near-lowest Compassion score reads as armor: feeling with others seems like a door an enemy could use. But the armor is costing more than any likely attack.",
            "Let yourself be visibly moved once, without apologizing for it.",
        ),
        n(
            "The Open Hand",
            "Compassion is your strongest gravity.",
            "You see the invisible, give in the dark, and extend mercy even inward. Lives are standing on this force of yours; it is infrastructure, not sentiment.",
            "Teach one person how you listen; it multiplies you.",
        ),
    ],
    // Phase 8: Reflection
    [
        n(
            "The Unvisited Room",
            "Self-knowledge is the territory you've mapped least.",
            "An inner life running unobserved repeats itself on schedule. The shadow is a stranger wearing your name and making your decisions while you look elsewhere.",
            "Sit for ten minutes today and write what you actually feel.",
        ),
        n(
            "The Fear of the Mirror",
            "You avoid your reflection in case it disagrees with you.",
            "The second-lowest score in Reflection means the looking glass is approached sideways. What the mirror holds is information, not a verdict; it cannot sentence you, only brief you.",
            "Ask someone you trust for one honest observation about you.",
        ),
        n(
            "The Clear Glass",
            "Self-knowledge is your sharpest instrument.",
            "You name your weather, catch your saboteur mid-play, and close your years with written reckonings. Fluency in yourself makes every other skill cheaper to learn.",
            "Use the clarity on a decision you've been deferring.",
        ),
    ],
    // Phase 9: Transcendence
    [
        n(
            "The Sealed Sky",
            "The vertical dimension of your life is closed for repairs.",
            "No silence, no awe, no practice: the deepest rooms of the house go unvisited. The shadow is not disbelief; it is a sense that atrophied from disuse and still waits.",
            "Spend five minutes tonight under the open sky, doing nothing.",
        ),
        n(
            "The Fear of the Depths",
            "Stillness unsettles you because of what might surface there.",
            "A near-lowest Transcendence score often marks noise used as a hiding place. What waits in the silence is not an accusation; it is the rest of you.",
            "Sit in silence for three minutes; let whatever surfaces, surface.",
        ),
        n(
            "The Standing Temple",
            "Your connection to the larger story is your strongest ground.",
            "Awe, gratitude, and the wide-angle lens keep your worries honestly sized. You draw from a well that does not depend on circumstances, which makes you hard to bankrupt.",
            "Bring one person with you into a place that humbles you.",
        ),
    ],
    // Phase 10: Legacy
    [
        n(
            "The Unplanted Field",
            "What will remain of you is the question you most defer.",
            "Time slips unwatched and lessons die unshipped. The shadow is a field fully capable of bearing fruit, standing unplanted because the planting was never scheduled.",
            "Start, today, the smallest version of the thing that would remain.",
        ),
        n(
            "The Fear of the Last Page",
            "Endings are the direction you refuse to look.",
            "The second-lowest Legacy score points at an unfaced horizon. Avoiding the last page does not delay it; it only guarantees the middle chapters are written by default.",
            "Write the single sentence you'd want remembered, then live toward it.",
        ),
        n(
            "The Planted Grove",
            "Legacy is your strongest force: you build beyond your own horizon.",
            "You mentor, create, and tend things that will bloom without you. Gardening in decades puts you in partnership with time instead of at war with it.",
            "Name a successor for something you've built, and begin handing it over.",
        ),
    ],
];

/// Narrative for a phase and force role, or `None` outside 1..=10.
#[inline]
pub fn narrative_for(phase_id: u8, force: ForceType) -> Option<&'static ForceNarrative> {
    let row = FORCE_TABLE.get(phase_id.checked_sub(1)? as usize)?;
    let idx = match force {
        ForceType::Shadow => 0,
        ForceType::Fear => 1,
        ForceType::Power => 2,
    };
    Some(&row[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exhaustive() {
        // 10 phases x 3 roles: every entry present with non-empty fields.
        for phase_id in 1u8..=10 {
            for force in ForceType::ALL {
                let narrative = narrative_for(phase_id, force)
                    .unwrap_or_else(|| panic!("missing entry for phase {} {}", phase_id, force));
                assert!(!narrative.title.is_empty());
                assert!(!narrative.description.is_empty());
                assert!(!narrative.insight.is_empty());
                assert!(!narrative.action.is_empty());
            }
        }
    }

    #[test]
    fn test_out_of_domain_ids() {
        assert!(narrative_for(0, ForceType::Shadow).is_none());
        assert!(narrative_for(11, ForceType::Power).is_none());
    }

    #[test]
    fn test_role_order() {
        let shadow = narrative_for(1, ForceType::Shadow).unwrap();
        let power = narrative_for(1, ForceType::Power).unwrap();
        assert_eq!(shadow.title, "The Buried Root");
        assert_eq!(power.title, "The Deep Root");
    }
}
