//! Per-phase score-band tables: archetype profiles and global feedback.
//!
//! Each phase carries two independent band tables over the same total:
//! four profile bands (archetype, description, message) and three global
//! feedback bands. The cut points are phase-specific literal data and the
//! two tables deliberately do not share a rule; both are reproduced as
//! given, not derived.

/// Profile selected for a phase total.
#[derive(Debug, Clone, Copy)]
pub struct PhaseProfile {
    /// Archetype name.
    pub archetype: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Short direct message to the user.
    pub message: &'static str,
}

struct ProfileBands {
    /// Upper-exclusive cut points; totals below `cuts[0]` take the first
    /// profile, below `cuts[1]` the second, below `cuts[2]` the third,
    /// everything else the fourth. The first band absorbs the whole lower
    /// tail, so the table is total over any reachable score.
    cuts: [i32; 3],
    profiles: [PhaseProfile; 4],
}

struct FeedbackBands {
    cuts: [i32; 2],
    texts: [&'static str; 3],
}

const fn p(
    archetype: &'static str,
    description: &'static str,
    message: &'static str,
) -> PhaseProfile {
    PhaseProfile {
        archetype,
        description,
        message,
    }
}

static PROFILE_TABLE: [ProfileBands; 10] = [
    // Phase 1: Origins
    ProfileBands {
        cuts: [8, 16, 24],
        profiles: [
            p(
                "The Unrooted",
                "Your earliest chapter is still sealed. The patterns set in childhood run your days from behind a curtain, unexamined and therefore unchallenged.",
                "Open the first chapter; everything after it will read differently.",
            ),
            p(
                "The Returning One",
                "You have begun glancing backward. Pieces of your origin surface, but the full map of how you were shaped remains folded.",
                "Keep returning; each visit to the past buys freedom in the present.",
            ),
            p(
                "The Root Reader",
                "You can name most of the hands that shaped you, and you have forgiven several of them. Your past informs you without commanding you.",
                "You are close to full ownership of your beginnings.",
            ),
            p(
                "The Rooted One",
                "Your origins are integrated ground. You draw strength from where you came from, honor what was given, and carry none of it as dead weight.",
                "Your roots feed the whole tree; keep drawing from them.",
            ),
        ],
    },
    // Phase 2: Learning
    ProfileBands {
        cuts: [9, 17, 25],
        profiles: [
            p(
                "The Closed Book",
                "Your mind runs on old stock. Beliefs go unaudited, mistakes unexamined, and curiosity waits outside a door that rarely opens.",
                "One honest question a day would change the whole library.",
            ),
            p(
                "The Occasional Student",
                "You learn when life insists. The appetite is real but irregular, and what you gather often slips away uncaptured.",
                "Give your curiosity a schedule and a notebook.",
            ),
            p(
                "The Student of Life",
                "You revise your opinions, collect your lessons, and treat feedback as raw material. Your mind compounds.",
                "Your willingness to be wrong is your fastest engine.",
            ),
            p(
                "The Scholar of Experience",
                "Learning is your resting state. You hunt contradictions, finish what you start, and keep receipts for your beliefs.",
                "Teach what you know; it is the last step of learning it.",
            ),
        ],
    },
    // Phase 3: Action
    ProfileBands {
        cuts: [8, 15, 23],
        profiles: [
            p(
                "The Hesitant",
                "Intentions pile up at the gate. Motivation decides everything, and so almost nothing survives the first dip of mood.",
                "Pick the smallest avoided task and do it before noon.",
            ),
            p(
                "The Starter",
                "You launch with real fire, and the fire is the problem: when it cools, so do the projects. Your will works in weather-dependent shifts.",
                "Build one habit that runs without enthusiasm.",
            ),
            p(
                "The Steady Hand",
                "Discipline carries what motivation drops. Your days have structure, your promises mostly hold, and dread gets a schedule instead of a veto.",
                "Guard the structure; it is carrying more than you know.",
            ),
            p(
                "The Forger",
                "You move on decision, finish without an audience, and convert collapse into material. Your word to yourself is infrastructure.",
                "Aim this engine at something worthy of it.",
            ),
        ],
    },
    // Phase 4: Bonds
    ProfileBands {
        cuts: [7, 15, 24],
        profiles: [
            p(
                "The Guarded Heart",
                "Your walls predate most of the people outside them. Closeness feels like exposure, so the essential words go unsaid and help goes unreceived.",
                "Let one person one step closer this month.",
            ),
            p(
                "The Careful Lover",
                "You bond slowly and keep a small, real circle. Conflict still triggers retreat, and some accounts with loved ones remain quietly open.",
                "Say the unsaid thing while it still matters.",
            ),
            p(
                "The Open Heart",
                "You repair after conflict, speak your love out loud, and let yourself be cared for. Your bonds are tended ground.",
                "Your presence is already a gift; keep delivering it.",
            ),
            p(
                "The Beloved and Belonging",
                "Love sits on your decision council. You apologize first, release resentment fast, and your closest ties deepen with every year.",
                "Protect this wealth; it outvalues every other kind.",
            ),
        ],
    },
    // Phase 5: Meaning
    ProfileBands {
        cuts: [9, 16, 24],
        profiles: [
            p(
                "The Drifter",
                "Your days run on inertia and other people's schedules. The largest questions are politely avoided, and the calendar confesses it.",
                "Name one value and give it one hour this week.",
            ),
            p(
                "The Questioner",
                "The why has started asking for you. You feel flashes of meaning and discomfort in equal measure; both are coordinates.",
                "Follow the flashes; they are not random.",
            ),
            p(
                "The Pathfinder",
                "You hold a working answer to what your life is for, and your hours increasingly agree with it. Purpose funds your persistence.",
                "Tighten the gap between your values and your calendar.",
            ),
            p(
                "The Purposed",
                "Your why is load-bearing. Work, practice and time align with what you'd do if money dissolved as a concern.",
                "Your clarity is rare; spend it generously.",
            ),
        ],
    },
    // Phase 6: Ambition
    ProfileBands {
        cuts: [8, 16, 25],
        profiles: [
            p(
                "The Dormant Flame",
                "The engine idles. Goals stay unwritten, risk stays untouched, and doubt, yours or borrowed, decides most outcomes.",
                "Write one goal down tonight; ink is ignition.",
            ),
            p(
                "The Restless Climber",
                "Ambition stirs but wobbles. Wins pass unmarked, other voices share your steering wheel, and the five-year picture is fog.",
                "Mark your next win and let results answer your doubters.",
            ),
            p(
                "The Builder",
                "You price risk, invest in your tools, and finish hard things unobserved. The sketch of what you're building is real and growing.",
                "Keep drawing; the blueprint is almost a building.",
            ),
            p(
                "The Summit Walker",
                "You work from a vivid picture of the future, choose rivals who sharpen you, and your wins compound into a visible path.",
                "From this height, choose mountains that deserve you.",
            ),
        ],
    },
    // Phase 7: Compassion
    ProfileBands {
        cuts: [7, 14, 22],
        profiles: [
            p(
                "The Withheld",
                "Kindness exists in you behind glass. Help waits to be asked, eyes turn away from the inconvenient, and mercy rarely includes yourself.",
                "Give one unasked kindness this week, in secret.",
            ),
            p(
                "The Quiet Giver",
                "You give when convenience allows and feel more than you show. The bridge to other hearts exists; you cross it on good days.",
                "Let the giving become a reflex, not an event.",
            ),
            p(
                "The Generous",
                "You notice needs before they're spoken, give without credentials checks, and part of your kindness needs no witness.",
                "Your warmth is structural to several lives already.",
            ),
            p(
                "The Healer",
                "Compassion is your default setting, extended even to yourself. You see the invisible, release wrongs quickly, and give best in the dark.",
                "Guard your borders; open hearts still need gates.",
            ),
        ],
    },
    // Phase 8: Reflection
    ProfileBands {
        cuts: [9, 17, 24],
        profiles: [
            p(
                "The Stranger Within",
                "Your inner life runs unobserved. Feelings go unnamed, reactions unexamined, and the one question that matters most stays unasked.",
                "Spend ten silent minutes with yourself today.",
            ),
            p(
                "The Mirror Gazer",
                "You glance inward and sometimes catch the truth. The journal is scattered, the self-portrait airbrushed, but the looking is real.",
                "Look longer; the mirror rewards patience.",
            ),
            p(
                "The Self-Aware",
                "You read your own instruments, interview your triggers, and know your saboteur's face. Your inner archive is growing.",
                "Turn the awareness into one changed pattern.",
            ),
            p(
                "The Illuminated",
                "You are fluent in yourself. Envy becomes direction, failure gets a fair trial, and your years close with written reckonings.",
                "Your clarity about yourself is a lamp; hold it for others.",
            ),
        ],
    },
    // Phase 9: Transcendence
    ProfileBands {
        cuts: [8, 16, 23],
        profiles: [
            p(
                "The Earthbound",
                "The vertical dimension is switched off. Silence is avoided, awe unvisited, and the largest rhythms play to a closed door.",
                "Stand under the night sky for five unhurried minutes.",
            ),
            p(
                "The Occasional Pilgrim",
                "Something in you leans toward the light at unpredictable hours. The practices are abandoned drafts, but the pull persists.",
                "Choose one small practice and keep it for thirty days.",
            ),
            p(
                "The Listener",
                "You keep appointments with depth. Gratitude runs near your baseline, mystery gets a fair hearing, and the wide-angle lens rescales your worries.",
                "Trust the rhythm you've found; deepen it.",
            ),
            p(
                "The Mystic Neighbor",
                "You live inside a larger story, consciously. Finitude focuses you, nature is a standing temple, and silence is where you refuel.",
                "Bring back what you find there; the rest of us need it.",
            ),
        ],
    },
    // Phase 10: Legacy
    ProfileBands {
        cuts: [7, 15, 23],
        profiles: [
            p(
                "The Unwritten",
                "The monument is unstarted. Time slips unwatched, lessons die unshipped, and the last page is a place you refuse to look.",
                "Start the smallest thing that would remain.",
            ),
            p(
                "The Gathering Builder",
                "Traces of contribution are scattering behind you, not yet gathered into a path. Intentions about what remains are forming.",
                "Gather the traces; they already point somewhere.",
            ),
            p(
                "The Storykeeper",
                "You mentor, create, and tend things that bloom on their own schedule. Your deposit in the ledger is real.",
                "Tell the people you love the essential things, now.",
            ),
            p(
                "The Living Foundation",
                "You garden in decades and build for people you'll never meet. The remembrance is being written daily, by your hand.",
                "Your shade trees are planted; rest under none of them.",
            ),
        ],
    },
];

static FEEDBACK_TABLE: [FeedbackBands; 10] = [
    FeedbackBands {
        cuts: [11, 21],
        texts: [
            "Your origins are still holding cards you haven't seen.",
            "You are in honest negotiation with your past.",
            "Your beginnings have become a source, not a weight.",
        ],
    },
    FeedbackBands {
        cuts: [12, 22],
        texts: [
            "Your mind is running on inventory; restock it.",
            "Your curiosity is alive and asking for structure.",
            "Your mind compounds; few engines are rarer.",
        ],
    },
    FeedbackBands {
        cuts: [10, 20],
        texts: [
            "Your will waits for weather; build it a roof.",
            "Your discipline is forming; protect the streak.",
            "Your word to yourself is solid ground.",
        ],
    },
    FeedbackBands {
        cuts: [11, 22],
        texts: [
            "Your heart is guarded beyond what its wounds require.",
            "Your bonds are real; a few need the words said aloud.",
            "Your love is spoken, tended, and returned.",
        ],
    },
    FeedbackBands {
        cuts: [12, 21],
        texts: [
            "Your days are waiting for a why.",
            "Meaning is flickering into view; follow it.",
            "Your life and your reasons are aligned.",
        ],
    },
    FeedbackBands {
        cuts: [10, 21],
        texts: [
            "Your ambition is idling under a closed hood.",
            "Your climb is underway; mark the altitude.",
            "You build from a blueprint most never draw.",
        ],
    },
    FeedbackBands {
        cuts: [11, 20],
        texts: [
            "Your kindness is rationed more than it wants to be.",
            "Your warmth reaches people; let it reach you too.",
            "Your compassion is structural to other lives.",
        ],
    },
    FeedbackBands {
        cuts: [12, 22],
        texts: [
            "Your inner rooms are unvisited; knock.",
            "You are learning your own language.",
            "You read yourself like a well-kept map.",
        ],
    },
    FeedbackBands {
        cuts: [10, 21],
        texts: [
            "The vertical dimension of your life is dark; light it.",
            "The larger rhythm is audible to you; tune in.",
            "You live consciously inside a larger story.",
        ],
    },
    FeedbackBands {
        cuts: [11, 21],
        texts: [
            "What remains of your days is still unchosen.",
            "Your legacy is gathering; give it a direction.",
            "You are building ground for people you'll never meet.",
        ],
    },
];

/// Profile for a phase total, or `None` outside 1..=10.
#[inline]
pub fn profile_for(phase_id: u8, total: i32) -> Option<&'static PhaseProfile> {
    let bands = PROFILE_TABLE.get(phase_id.checked_sub(1)? as usize)?;
    let idx = match total {
        t if t < bands.cuts[0] => 0,
        t if t < bands.cuts[1] => 1,
        t if t < bands.cuts[2] => 2,
        _ => 3,
    };
    Some(&bands.profiles[idx])
}

/// Global feedback for a phase total, or `None` outside 1..=10.
#[inline]
pub fn global_feedback_for(phase_id: u8, total: i32) -> Option<&'static str> {
    let bands = FEEDBACK_TABLE.get(phase_id.checked_sub(1)? as usize)?;
    let idx = match total {
        t if t < bands.cuts[0] => 0,
        t if t < bands.cuts[1] => 1,
        _ => 2,
    };
    Some(bands.texts[idx])
}
