//! Static revelation content: phase tier templates, per-axis energy
//! paragraphs, and the fixed pattern/extreme/contradiction/force lists.
//!
//! Literal content only. Phase tier templates carry `{title}` and
//! `{archetype}` placeholders substituted at generation time; everything
//! else is fixed text whose only per-user variation is quote decoration.

use life_clock_core::types::EnergyType;

/// One tier of the phase batch: a template pair selected by score percent.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTierTemplate {
    /// Card icon for this tier.
    pub icon: &'static str,
    /// Insight template; `{title}` and `{archetype}` are substituted.
    pub template: &'static str,
}

/// Phase tier templates in ascending tier order: percent `<40`, `<60`,
/// `<80`, else.
pub static PHASE_TIERS: [PhaseTierTemplate; 4] = [
    PhaseTierTemplate {
        icon: "🌑",
        template: "Your {title} chamber is running on reserve power. The {archetype} in you has been waiting in the dark of this room, and the rest of your clock compensates for the hours it doesn't supply.\n\nWhat looks like weakness in {title} is stored capacity. Most of what this area needs is not talent but attention; attention is the one resource you fully control.",
    },
    PhaseTierTemplate {
        icon: "🌘",
        template: "Your {title} chamber is waking but not yet awake. The {archetype} stirs here: there are real movements in this part of your life, still too irregular to carry weight.\n\nThe pattern in {title} is a pendulum that hasn't found its rhythm. One small, repeated act in this area would do more than any single grand gesture.",
    },
    PhaseTierTemplate {
        icon: "🌗",
        template: "Your {title} chamber runs strong. The {archetype} is an earned identity here, and this part of your clock quietly subsidizes the weaker chambers around it.\n\nThe risk in {title} is maintenance neglect; strengths fail silently because nobody audits them. Keep investing in what already works.",
    },
    PhaseTierTemplate {
        icon: "🌕",
        template: "Your {title} chamber is at full radiance. The {archetype} is not a mask you wear but the mechanism itself; in this area you operate at a level most people only visit.\n\nFull chambers carry a duty: {title} is where you have surplus, and surplus unshared turns stale. Someone near you needs exactly what this room overflows with.",
    },
];

/// Per-axis energy revelation content.
#[derive(Debug, Clone, Copy)]
pub struct EnergyTemplate {
    /// Card title.
    pub title: &'static str,
    /// Card icon.
    pub icon: &'static str,
    /// Insight shown when the axis percent is at or above 70.
    pub high: &'static str,
    /// Insight shown below 70.
    pub low: &'static str,
}

/// Energy templates in canonical axis order.
pub static ENERGY_TEMPLATES: [EnergyTemplate; 4] = [
    EnergyTemplate {
        title: "Your Mind Current",
        icon: "🧠",
        high: "The current of thought in you runs wide and deep. You examine your origins, revise your beliefs, and read your own instruments with a fluency that makes every other skill cheaper; the hazard is living one story up from your own body, analyzing what asks to be felt.",
        low: "The current of thought in you is dammed upstream. Origins unexamined, lessons uncaptured and the mirror avoided all feed the same reservoir; when it opens, the three Mind chambers of your clock tend to rise together.",
    },
    EnergyTemplate {
        title: "Your Heart Current",
        icon: "💗",
        high: "The current of connection in you is a working river: bonds are tended, kindness is delivered and not merely felt, and people can build on what you say. Guard the source; hearts that irrigate everyone else's fields forget their own.",
        low: "The current of connection in you is running below its banks. Closeness is rationed and compassion waits behind glass; the thirst this creates is quiet but it accumulates, and the two Heart chambers of your clock answer to the same gate.",
    },
    EnergyTemplate {
        title: "Your Drive Current",
        icon: "🔥",
        high: "The current of will in you runs hot and usable: decisions reach your hands, ambition has coordinates, and your word to yourself holds under bad weather. The one failure mode of a forge this strong is burning material that deserved a building.",
        low: "The current of will in you is banked coals, not ash. Action stalls at the first step and ambition idles under a closed hood; both Drive chambers of your clock are waiting for the same spark, which is one kept promise to yourself.",
    },
    EnergyTemplate {
        title: "Your Spirit Current",
        icon: "✨",
        high: "The current of meaning in you runs clear: purpose funds your persistence, awe keeps your worries honestly sized, and what you build reaches past your own horizon. Spend this clarity in public; it is rarer than you think.",
        low: "The current of meaning in you is a sealed spring. The why goes unasked, silence goes avoided and the long view stays folded; the three Spirit chambers of your clock share that seal, and one practice would loosen all of them.",
    },
];

/// A fixed static revelation.
#[derive(Debug, Clone, Copy)]
pub struct StaticRevelation {
    /// Card title.
    pub title: &'static str,
    /// Card icon.
    pub icon: &'static str,
    /// Insight body, with paragraph breaks.
    pub insight: &'static str,
}

const fn s(title: &'static str, icon: &'static str, insight: &'static str) -> StaticRevelation {
    StaticRevelation {
        title,
        icon,
        insight,
    }
}

/// The ten pattern revelations, in fixed order.
pub static PATTERN_REVELATIONS: [StaticRevelation; 10] = [
    s(
        "The Repetition Loop",
        "🔁",
        "There is a scene your life keeps restaging with new actors. Different job, different city, different faces, and somehow the same third act; the loop is not bad luck, it is choreography you rehearsed so long ago you forgot it was learned.\n\nLoops break at the moment of recognition, never at the moment of resolution. The next time the familiar scene assembles itself, your only job is to notice it while it is still happening.",
    ),
    s(
        "The Morning Mirror",
        "🪞",
        "The first twenty minutes of your day are a confession you make daily and read never. Where the hand reaches, where the eyes go, what the body does before the will wakes up: that is the real belief system.\n\nChange attempted at noon fights the whole day's momentum. Change planted in those first minutes inherits it.",
    ),
    s(
        "The Borrowed Script",
        "📜",
        "Part of the life you are living was written by someone else and never countersigned by you. An expectation absorbed early can run for decades on borrowed authority, issuing deadlines in a voice you mistake for your own.\n\nThe test is simple and uncomfortable: for each major obligation, ask who originally ordered it. Keep what you would reorder today; the rest is inventory, not identity.",
    ),
    s(
        "The Quiet Negotiation",
        "🤝",
        "Every day you conduct a negotiation you never acknowledge: between the person you present and the person you are when no one collects evidence. The spread between the two is the most expensive position you hold.\n\nClosing that spread is not a moral project but an energy project. Pretending is the highest-interest loan a personality can take.",
    ),
    s(
        "The Postponed Conversation",
        "💬",
        "There is one conversation you have been scheduling and cancelling internally for years. You know the other party; you may even know the opening sentence. Its postponement quietly taxes decisions that seem unrelated to it.\n\nConversations like this cost less in reality than in rehearsal, almost without exception. The version in your head has compounded; the real one has not.",
    ),
    s(
        "The Invisible Ledger",
        "📒",
        "You keep accounts you would deny keeping: favors owed, slights uncollected, credit misassigned. The ledger is invisible precisely because auditing it would force settlements you are avoiding.\n\nUnsettled accounts do not sit still; they accrue. Forgive the debt or collect it, but stop carrying the book.",
    ),
    s(
        "The Comfort Orbit",
        "🛰️",
        "Somewhere along the way you achieved a stable orbit: low enough to avoid the cold of real risk, high enough to avoid the friction of real change. Orbits feel like motion because they are motion; they are also a way of going nowhere at great speed.\n\nLeaving an orbit takes a burn, a deliberate, costly push at the right moment. You have fuel for it.",
    ),
    s(
        "The Rehearsed Answer",
        "🎭",
        "When certain questions approach, a prepared answer steps forward so smoothly you no longer notice the handoff. How are you, what do you want, are you happy: the understudy performs while the real answer stays backstage.\n\nOnce, soon, let the unrehearsed answer speak first. It will be clumsier and truer, in that order.",
    ),
    s(
        "The Halfway Habit",
        "⏸️",
        "You have a signature distance at which you stop: far enough to prove you could, short enough to avoid what finishing would claim about you. Eighty percent is the safest address in your life.\n\nFinishing is not a skill problem for you; it is an identity permission. The thing you complete will redefine you, and some part of you has been declining the promotion.",
    ),
    s(
        "The Returning Question",
        "❓",
        "One question has visited you at intervals your whole life, wearing different clothes each decade. You have answered everything around it.\n\nIts persistence is not a malfunction; the question is the assignment. The decades are not waiting for your answer to be perfect, only for it to be yours.",
    ),
];

/// The ten extreme revelations, in fixed order.
pub static EXTREME_REVELATIONS: [StaticRevelation; 10] = [
    s(
        "Your Highest Room",
        "🏔️",
        "Somewhere in your profile is a score that would embarrass you by its height if scores were public. That peak is not an accident of the questionnaire; it marks capital you have been quietly accumulating for years.\n\nPeaks obligate. An unusual strength kept private is a lamp under a basket, and the people who need its light are usually closer than you think.",
    ),
    s(
        "Your Lowest Room",
        "🕳️",
        "Your lowest chamber is not your most damaged one; it is your most deferred one. The difference matters: damage needs repair, but deferral only needs a decision.\n\nLow rooms respond to small light. The gap between zero attention and some attention is the largest single gain available anywhere in your clock.",
    ),
    s(
        "The Steepest Climb",
        "🧗",
        "One area of your life improved against genuine resistance, and you have never awarded yourself the medal for it. Growth with a headwind counts double, and you logged it at face value.\n\nRevisit that climb once, deliberately, as evidence. The same mechanics that carried you up that slope are installed and idle, waiting for the next one.",
    ),
    s(
        "The Widest Gap",
        "↔️",
        "The most informative number in your profile is not any single score but the distance between your highest and lowest. A wide spread means your life is being lived in different centuries at once: one wing modern, one wing unbuilt.\n\nWide gaps leak. Energy drains across them from the strong wing to prop the weak one, and the strong wing calls that drain 'being tired lately'.",
    ),
    s(
        "The Oldest Strength",
        "🗿",
        "One of your strengths predates your memory of acquiring it. It feels like nothing because it never cost you anything; you assume everyone has it, and you discount every compliment it earns.\n\nWhat is free to you is expensive to almost everyone else. That asymmetry is not a curiosity; it is a market, and you have been giving away the inventory.",
    ),
    s(
        "The Youngest Wound",
        "🩹",
        "Your most recent wound is still deciding what it will become: scar tissue that stiffens or trained tissue that strengthens. Wounds make that choice early, in the first seasons after impact, and they make it based on how honestly they are examined.\n\nThis one is still in its window. Examine it now, while it is soft enough to teach.",
    ),
    s(
        "The Loudest Signal",
        "📡",
        "One result in your profile is not information but alarm: a reading so far from your own expectation that its job is to interrupt you. You have already guessed which one.\n\nAlarms are not verdicts. But an alarm acknowledged late becomes a bill, and this one has been ringing politely for some time.",
    ),
    s(
        "The Quietest Talent",
        "🤫",
        "Below your named skills sits an unnamed one: the thing people actually come to you for, which has never appeared on any version of your resume. Others see it clearly; to you it is wallpaper.\n\nAsk three people what they would call it. The consensus will surprise you, and naming it is the first step to charging it, in any currency that matters to you.",
    ),
    s(
        "The Brightest Hour",
        "🌞",
        "There is a recurring hour in which you are reliably the best version of yourself, and your schedule currently spends it on logistics. Peak hours are rare metal; you have been using yours as packing material.\n\nMove one thing that matters into that hour. Nothing else about the day needs to change for the yield to.",
    ),
    s(
        "The Heaviest Door",
        "🚪",
        "The single change that would most redistribute the weights in your profile is behind the door you have categorized as 'later'. You know the door; you maintain the category.\n\n'Later' is not a time. Doors of this weight do not get lighter with age, but the arms do.",
    ),
];

/// The seven contradiction revelations, in fixed order.
pub static CONTRADICTION_REVELATIONS: [StaticRevelation; 7] = [
    s(
        "The Giver Who Won't Receive",
        "🎁",
        "You extend help with both hands and accept it with neither. The generosity is real; so is the wall, and the wall teaches people that you need nothing, which is the one lesson about you that is false.\n\nReceiving is not the opposite of giving; it is its completion. A gift refused is a bond declined.",
    ),
    s(
        "The Planner Who Waits",
        "🗺️",
        "You hold maps of futures you have not started walking toward. The planning is excellent and the departure keeps not happening; somewhere the map became a substitute for the journey instead of its instrument.\n\nA plan is only debt until the first step services it. Take the smallest step the map allows, today if possible.",
    ),
    s(
        "The Seeker Who Hides",
        "🔦",
        "You genuinely want to be found, known, and understood, and you have structured your life to make it nearly impossible. The seeking and the hiding are the same reflex pointed in opposite directions.\n\nBeing found requires standing still somewhere visible. Pick one person and one truth, and hold still.",
    ),
    s(
        "The Strong One Who Aches",
        "🛡️",
        "You are the load-bearing member of more structures than anyone guesses, and the role has a clause you never negotiated: the strong one does not get to ache out loud. So the ache files itself as fatigue.\n\nStrength that cannot admit weight is not strength; it is unpriced risk. Tell one person what it actually costs.",
    ),
    s(
        "The Free Spirit on a Leash",
        "🪁",
        "Your self-image runs on freedom and your weeks run on obligations you could renegotiate and don't. The leash is real but the far end is in your own hand, which is the part the self-image refuses to check.\n\nList the constraints; star the self-imposed ones. The list is usually shorter, and more yours, than the feeling claims.",
    ),
    s(
        "The Believer Who Doubts",
        "🕯️",
        "You carry a conviction and a skepticism about that conviction, and you treat their coexistence as a flaw to hide. It is the opposite: belief without any doubt is decoration, and doubt without any belief is drift.\n\nThe tension you are ashamed of is the load-bearing cable. Stop trying to cut either end.",
    ),
    s(
        "The Builder Who Won't Inhabit",
        "🏚️",
        "You construct lives, careers, and rooms with real skill, and you live in none of them fully; there is always a next structure excusing you from occupying the current one. Building has become a way to defer arriving.\n\nFinish nothing new this season. Move into what is already built, and learn what the furniture knows.",
    ),
];

/// The six force revelations, in fixed order.
pub static FORCE_REVELATIONS: [StaticRevelation; 6] = [
    s(
        "The Shadow's Bargain",
        "🌒",
        "Your lowest chamber made a deal with you long ago: it stays quiet and you stay away. The bargain worked; that is exactly the problem, because rooms kept sealed set the temperature of the whole house.\n\nThe shadow is not asking to be fixed. It is asking to be visited, which is cheaper and harder.",
    ),
    s(
        "The Fear's Errand",
        "🕸️",
        "Your second-lowest chamber is where fear runs its errands: small avoidances, rerouted plans, topics changed a half-second early. None of it looks like fear; all of it is.\n\nFollow one rerouted plan back to its origin and you will find the errand's sender. Fear mapped is fear halved.",
    ),
    s(
        "The Power's Debt",
        "⚡",
        "Your highest chamber was built partly from materials the lower ones never received. Power of this kind carries a debt, not a guilt: it owes protection and supply to the rooms it outgrew.\n\nStrength that only serves itself peaks early. Strength that funds the weak chambers compounds for life.",
    ),
    s(
        "The Threefold Engine",
        "⚙️",
        "Shadow, fear, and power are not three findings; they are one engine seen from three sides. The shadow stores the fuel, the fear regulates the intake, and the power is where combustion already succeeded once.\n\nMost people upgrade the strong cylinder. The engine, however, is limited by the valve, and the valve is the fear.",
    ),
    s(
        "The Turning Point",
        "🧭",
        "Profiles like yours sit near a hinge: the same configuration of forces reads as stuck from one side and as loaded from the other. Which reading becomes true is decided by the next season's smallest repeated choices, not by any single large one.\n\nHinges do not announce themselves. This is the announcement.",
    ),
    s(
        "The Integration",
        "🔗",
        "The end state of this work is not a profile of four even scores; it is a clock whose uneven chambers know about each other. Integration means the strong rooms lend, the weak rooms borrow, and nothing operates in secret.\n\nYou do not need to become someone else. You need the selves you already run to be introduced.",
    ),
];

/// Title for a phase revelation.
pub fn phase_revelation_title(phase_title: &str) -> String {
    format!("The {} Chamber", phase_title)
}

/// Title for an energy revelation.
#[inline]
pub fn energy_template_for(axis: EnergyType) -> &'static EnergyTemplate {
    &ENERGY_TEMPLATES[EnergyType::ALL
        .iter()
        .position(|&a| a == axis)
        .expect("axis present in canonical order")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_list_counts() {
        assert_eq!(PHASE_TIERS.len(), 4);
        assert_eq!(ENERGY_TEMPLATES.len(), 4);
        assert_eq!(PATTERN_REVELATIONS.len(), 10);
        assert_eq!(EXTREME_REVELATIONS.len(), 10);
        assert_eq!(CONTRADICTION_REVELATIONS.len(), 7);
        assert_eq!(FORCE_REVELATIONS.len(), 6);
    }

    #[test]
    fn test_tier_templates_carry_placeholders() {
        for tier in &PHASE_TIERS {
            assert!(tier.template.contains("{title}"));
            assert!(tier.template.contains("{archetype}"));
            assert!(!tier.icon.is_empty());
        }
    }

    #[test]
    fn test_static_revelations_nonempty() {
        for list in [
            &PATTERN_REVELATIONS[..],
            &EXTREME_REVELATIONS[..],
            &CONTRADICTION_REVELATIONS[..],
            &FORCE_REVELATIONS[..],
        ] {
            for item in list {
                assert!(!item.title.is_empty());
                assert!(!item.icon.is_empty());
                assert!(!item.insight.is_empty());
            }
        }
    }

    #[test]
    fn test_energy_templates_have_both_variants() {
        for template in &ENERGY_TEMPLATES {
            assert!(!template.high.is_empty());
            assert!(!template.low.is_empty());
            assert_ne!(template.high, template.low);
        }
    }

    #[test]
    fn test_phase_title_embeds_phase_name() {
        // The legacy quote pass matches on the phase title being present.
        assert_eq!(phase_revelation_title("Origins"), "The Origins Chamber");
    }
}
