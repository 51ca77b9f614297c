//! Static phase catalog: ten phases, ten questions each, four scored
//! answer options per question.
//!
//! Option values lie in -1..=3 with a per-question maximum of 3, so the
//! reachable per-phase maximum total is 30 (`PhaseResult::MAX_TOTAL`).
//! Everything in this file is literal content; the evaluation logic lives
//! in `evaluate.rs` and the score-band tables in `profiles.rs`.

/// One selectable answer option.
#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    /// Option text shown in the quiz chat.
    pub text: &'static str,
    /// Score carried by this option.
    pub value: i32,
    /// Canned feedback shown after picking this option.
    pub feedback: &'static str,
}

/// One quiz question with its four options.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Question prompt.
    pub prompt: &'static str,
    /// The four selectable options.
    pub options: [AnswerOption; 4],
}

/// One of the ten thematic phases.
#[derive(Debug, Clone, Copy)]
pub struct PhaseDefinition {
    /// Phase id in 1..=10.
    pub id: u8,
    /// Phase title.
    pub title: &'static str,
    /// The ten questions of this phase.
    pub questions: [Question; 10],
}

const fn o(text: &'static str, value: i32, feedback: &'static str) -> AnswerOption {
    AnswerOption {
        text,
        value,
        feedback,
    }
}

const fn q(prompt: &'static str, options: [AnswerOption; 4]) -> Question {
    Question { prompt, options }
}

/// The full static catalog, indexed by `id - 1`.
pub static PHASES: [PhaseDefinition; 10] = [
    // Phase 1: Origins (Mind)
    PhaseDefinition {
        id: 1,
        title: "Origins",
        questions: [
            q(
                "How often do you revisit memories from your childhood?",
                [
                    o("Almost never", 0, "The earliest chapter still waits unread."),
                    o("Only when something triggers them", 1, "Your past speaks, but only when spoken to."),
                    o("Fairly regularly", 2, "You keep a working line to your beginnings."),
                    o("They are always close to me", 3, "Your roots feed you daily."),
                ],
            ),
            q(
                "Do you understand how your family shaped who you are?",
                [
                    o("I've never thought about it", 0, "The mold is invisible until you look at it."),
                    o("Vaguely", 1, "You sense the pattern without naming it."),
                    o("In several concrete ways", 2, "You can point at the hands that shaped you."),
                    o("I could map it in detail", 3, "Few people read their own blueprint this clearly."),
                ],
            ),
            q(
                "When you think of the house you grew up in, what comes first?",
                [
                    o("A feeling I'd rather avoid", -1, "Some rooms are still locked from the inside."),
                    o("Mostly neutral images", 1, "Distance has cooled those walls."),
                    o("A mix of warmth and friction", 2, "Honest memory holds both temperatures."),
                    o("Warmth I still carry", 3, "That warmth became part of your architecture."),
                ],
            ),
            q(
                "Have you forgiven the people who raised you for their mistakes?",
                [
                    o("There is nothing to forgive", 1, "Certainty can also be a locked door."),
                    o("Not yet", 0, "The bill is still open on the table."),
                    o("Mostly", 2, "Forgiveness is a road, and you are on it."),
                    o("Fully, and it freed me", 3, "You closed the account and kept the lesson."),
                ],
            ),
            q(
                "Do childhood dreams still influence your choices today?",
                [
                    o("I don't remember them", 0, "A compass was packed away with the toys."),
                    o("Rarely", 1, "The old dreams whisper from a far shelf."),
                    o("Sometimes, in quiet ways", 2, "The child still votes in your elections."),
                    o("Yes, they steer me", 3, "You never broke the thread to your first wishes."),
                ],
            ),
            q(
                "How clearly can you name your earliest ambition?",
                [
                    o("Not at all", 0, "First fires fade when no one tends them."),
                    o("Only the outline", 1, "The shape is there; the color is gone."),
                    o("Clearly", 2, "You kept the photograph of your first wanting."),
                    o("Clearly, and I honor it", 3, "Your first ambition still gets a seat at the table."),
                ],
            ),
            q(
                "Were you allowed to show your feelings as a child?",
                [
                    o("No, feelings were unwelcome", -1, "A silenced child learns expensive silence."),
                    o("Only the convenient ones", 1, "You learned to edit before you learned to speak."),
                    o("Mostly yes", 2, "Your feelings had room to grow up with you."),
                    o("Yes, openly", 3, "Emotional daylight was your inheritance."),
                ],
            ),
            q(
                "Do you know the stories of your grandparents' lives?",
                [
                    o("Almost nothing", 0, "Two generations of maps are missing."),
                    o("A few anecdotes", 1, "Fragments of the longer story reached you."),
                    o("The main chapters", 2, "You carry the family saga's spine."),
                    o("In rich detail", 3, "You are the archive your family needed."),
                ],
            ),
            q(
                "When old wounds resurface, how do you respond?",
                [
                    o("I push them back down", 0, "Buried things keep their own calendar."),
                    o("I get overwhelmed", 1, "The wave still decides where you stand."),
                    o("I sit with them briefly", 2, "You have learned to hold the hot stone."),
                    o("I work through them deliberately", 3, "You turned the wound into a workshop."),
                ],
            ),
            q(
                "How connected do you feel to the place you come from?",
                [
                    o("Not at all", 0, "A tree can stand without naming its soil, but not easily."),
                    o("Faintly", 1, "The signal from home is weak but present."),
                    o("Clearly connected", 2, "Your origin still answers when you call."),
                    o("It is part of my identity", 3, "You carry your ground with you everywhere."),
                ],
            ),
        ],
    },
    // Phase 2: Learning (Mind)
    PhaseDefinition {
        id: 2,
        title: "Learning",
        questions: [
            q(
                "How often do you learn something new on purpose?",
                [
                    o("Hardly ever", 0, "A still mind gathers dust faster than it thinks."),
                    o("A few times a year", 1, "The door opens, but rarely."),
                    o("Every month", 2, "Your curiosity keeps regular office hours."),
                    o("Almost daily", 3, "Learning is your resting state."),
                ],
            ),
            q(
                "When was the last time you changed your mind about something important?",
                [
                    o("I can't recall", 0, "An opinion never revised becomes a wall."),
                    o("Years ago", 1, "The hinges still work; use them."),
                    o("Within the last year", 2, "You let evidence redecorate your mind."),
                    o("Recently, and gladly", 3, "You treat being wrong as a doorway."),
                ],
            ),
            q(
                "What do you do with ideas that contradict your beliefs?",
                [
                    o("I dismiss them", 0, "A guarded gate keeps out allies too."),
                    o("I argue against them", 1, "Friction is a start; curiosity is better."),
                    o("I examine them", 2, "You invite the stranger in for questioning."),
                    o("I hunt for them", 3, "You collect contradictions like rare coins."),
                ],
            ),
            q(
                "How do you feel when you don't know something in a conversation?",
                [
                    o("Ashamed, I hide it", -1, "Hidden gaps grow in the dark."),
                    o("Uncomfortable", 1, "The gap itches; that itch is useful."),
                    o("Fine, I ask", 2, "Your questions earn more than pretended answers."),
                    o("Delighted, a gap to fill", 3, "Not-knowing is your favorite invitation."),
                ],
            ),
            q(
                "Do you finish the books, courses, or projects you start?",
                [
                    o("Rarely", 0, "A shelf of open loops taxes the mind."),
                    o("About half", 1, "You finish when the wind cooperates."),
                    o("Most of them", 2, "Completion is becoming your signature."),
                    o("Almost always", 3, "You close what you open; rare discipline."),
                ],
            ),
            q(
                "How would you describe your relationship with your own mistakes?",
                [
                    o("I replay them at night", 0, "A mistake rehearsed is a wound reopened."),
                    o("I avoid thinking about them", 1, "The teacher waits outside the door."),
                    o("I note the lesson and move on", 2, "You pay the tuition once and keep the knowledge."),
                    o("They are my best teachers", 3, "You built a faculty out of your failures."),
                ],
            ),
            q(
                "When you believe something strongly, do you know why?",
                [
                    o("I've never checked", 0, "Unexamined beliefs steer from the back seat."),
                    o("For some beliefs", 1, "Part of your map has sources; part is rumor."),
                    o("For most of them", 2, "You audit your convictions like accounts."),
                    o("Yes, I trace them to their roots", 3, "Your beliefs carry receipts."),
                ],
            ),
            q(
                "How do you respond to feedback that stings?",
                [
                    o("I reject it", 0, "The mirror is not the enemy."),
                    o("I brood on it", 1, "You hold the sting longer than the lesson."),
                    o("I look for the true part", 2, "You pan the gravel and keep the gold."),
                    o("I thank the messenger", 3, "Sharp feedback finds you reachable."),
                ],
            ),
            q(
                "Do you have a way of capturing what you learn?",
                [
                    o("No, it comes and goes", 0, "Uncaptured insight evaporates overnight."),
                    o("Scattered notes", 1, "The harvest exists, but the barn leaks."),
                    o("A loose but real system", 2, "Your learning compounds because you store it."),
                    o("A deliberate practice", 3, "You run a treasury for your own mind."),
                ],
            ),
            q(
                "If you could study anything for a year, do you know what it would be?",
                [
                    o("No idea", 0, "Appetite unnamed goes unfed."),
                    o("A vague direction", 1, "The pull is real; give it a name."),
                    o("Two or three candidates", 2, "Your curiosity has a shortlist."),
                    o("Instantly, yes", 3, "A mind that knows its hunger eats well."),
                ],
            ),
        ],
    },
    // Phase 3: Action (Drive)
    PhaseDefinition {
        id: 3,
        title: "Action",
        questions: [
            q(
                "When you decide to do something, how soon do you start?",
                [
                    o("I often never start", 0, "Decisions without motion are daydreams."),
                    o("After a long delay", 1, "The engine turns over slowly."),
                    o("Within days", 2, "Your intentions reach your hands."),
                    o("Immediately", 3, "For you, deciding and doing share a border."),
                ],
            ),
            q(
                "How steady are your daily habits?",
                [
                    o("Chaotic", 0, "Each day reinvents itself from zero."),
                    o("A few anchors", 1, "Some posts stand; the fence is unfinished."),
                    o("Mostly structured", 2, "Your days have load-bearing walls."),
                    o("Reliably steady", 3, "Your habits carry you on bad days."),
                ],
            ),
            q(
                "What happens to your projects when motivation fades?",
                [
                    o("They die quietly", 0, "Motivation is weather; you need a roof."),
                    o("They stall for months", 1, "The pause often outlives the mood."),
                    o("Discipline carries them", 2, "You keep rowing when the wind stops."),
                    o("I finish regardless of mood", 3, "Your word to yourself is load-bearing."),
                ],
            ),
            q(
                "How do you handle tasks you dread?",
                [
                    o("Endless postponement", -1, "The dreaded task grows teeth overnight."),
                    o("I need a deadline to move", 1, "Outside pressure is your only fuel."),
                    o("I schedule them early", 2, "You eat the frog before it grows."),
                    o("I do them first, always", 3, "Dread gets no vote in your mornings."),
                ],
            ),
            q(
                "When did you last push through real physical or mental strain?",
                [
                    o("I avoid strain", 0, "Comfort is a slow anesthetic."),
                    o("A long time ago", 1, "The muscle remembers; remind it."),
                    o("Within recent months", 2, "You still visit your edges."),
                    o("This week", 3, "You train against resistance on purpose."),
                ],
            ),
            q(
                "How often do you say you'll do something and then actually do it?",
                [
                    o("Less than half the time", 0, "Broken small promises quietly erode trust."),
                    o("About half", 1, "Your word is a coin flip."),
                    o("Usually", 2, "People can build on what you say."),
                    o("Practically always", 3, "Your promises are infrastructure."),
                ],
            ),
            q(
                "What is your relationship with physical energy?",
                [
                    o("I'm chronically drained", 0, "An empty tank makes every hill a mountain."),
                    o("It comes and goes", 1, "Your power supply flickers."),
                    o("Mostly good", 2, "The body funds the will."),
                    o("I actively manage it", 3, "You treat energy as the asset it is."),
                ],
            ),
            q(
                "When plans collapse, what do you do?",
                [
                    o("I freeze", 0, "Rubble can become a wall or a grave."),
                    o("I complain, then drift", 1, "The storm passes; the drifting lingers."),
                    o("I replan within days", 2, "You rebuild with the same bricks."),
                    o("I improvise the same day", 3, "Collapse is raw material to you."),
                ],
            ),
            q(
                "How do you treat small daily frictions, like a messy desk or unpaid bill?",
                [
                    o("They pile up", 0, "Small neglect compounds like interest."),
                    o("I clear them in bursts", 1, "The tide goes out only when it must."),
                    o("I handle them weekly", 2, "You keep the decks mostly clear."),
                    o("I clear them as they appear", 3, "Nothing small is allowed to grow."),
                ],
            ),
            q(
                "If tomorrow required one hard action you've been avoiding, could you name it?",
                [
                    o("I'd rather not look", 0, "The avoided name still knows yours."),
                    o("Maybe, with effort", 1, "It sits just under the surface."),
                    o("Yes, I know it", 2, "Naming the lion is half the hunt."),
                    o("Named, scheduled, ready", 3, "You aim your will like an instrument."),
                ],
            ),
        ],
    },
    // Phase 4: Bonds (Heart)
    PhaseDefinition {
        id: 4,
        title: "Bonds",
        questions: [
            q(
                "How easily do you let people get close to you?",
                [
                    o("I keep everyone at distance", -1, "Walls keep out warmth as well as harm."),
                    o("Slowly and carefully", 1, "Your gate opens, but the hinge is stiff."),
                    o("With reasonable trust", 2, "You lend trust and usually collect it back."),
                    o("Openly", 3, "Closeness is your native climate."),
                ],
            ),
            q(
                "Can you name the people who truly know you?",
                [
                    o("No one truly does", 0, "Being unknown is a quiet famine."),
                    o("Perhaps one", 1, "One window is better than none; open more."),
                    o("A small circle", 2, "You are witnessed, and it steadies you."),
                    o("Yes, and they'd agree", 3, "Mutual knowing is your wealth."),
                ],
            ),
            q(
                "How do you behave in conflict with someone you love?",
                [
                    o("I withdraw completely", 0, "Silence can cut deeper than words."),
                    o("I attack, then regret", 1, "The fire wins before you do."),
                    o("I argue, then repair", 2, "You fight and still protect the bridge."),
                    o("I listen even when it burns", 3, "You keep the channel open under fire."),
                ],
            ),
            q(
                "When did you last tell someone what they mean to you?",
                [
                    o("I don't do that", 0, "Unspoken love is undelivered mail."),
                    o("I can't remember", 1, "The words exist; they need a courier."),
                    o("Within the last months", 2, "You pay love out loud, sometimes."),
                    o("Recently and specifically", 3, "You say the thing while it matters."),
                ],
            ),
            q(
                "How do you receive care when you are struggling?",
                [
                    o("I refuse it", 0, "Armor against help is still armor against love."),
                    o("Awkwardly", 1, "Receiving is a skill you are still learning."),
                    o("Gratefully, with effort", 2, "You let the door open inward."),
                    o("I ask for it outright", 3, "You know that asking is strength."),
                ],
            ),
            q(
                "What happens to your friendships over time?",
                [
                    o("They fade; I let them", 0, "Untended gardens return to weeds."),
                    o("A few survive by luck", 1, "Survivor friendships deserve a gardener."),
                    o("I maintain the important ones", 2, "You water what you want to keep."),
                    o("They deepen with years", 3, "Your bonds age like they were built to."),
                ],
            ),
            q(
                "Do you carry resentment toward someone close?",
                [
                    o("Yes, and it's heavy", -1, "Resentment is rent paid on an empty room."),
                    o("Some embers remain", 1, "Old heat still warms old wounds."),
                    o("Mostly cleared", 2, "You keep short accounts with the heart."),
                    o("No, I've released it", 3, "Your hands are free to hold what's next."),
                ],
            ),
            q(
                "How present are you when someone speaks to you?",
                [
                    o("Half elsewhere", 0, "A divided ear hears half a person."),
                    o("Depends on the day", 1, "Presence shouldn't be weather-dependent."),
                    o("Usually fully there", 2, "People feel received around you."),
                    o("Fully, it's a practice", 3, "Your attention is a gift people remember."),
                ],
            ),
            q(
                "Could you apologize first, even when you're only half wrong?",
                [
                    o("Never", 0, "Pride guards an empty treasury."),
                    o("Only under pressure", 1, "The bridge waits for your first step."),
                    o("Yes, usually", 2, "You trade being right for being close."),
                    o("Yes, and I have", 3, "You move first because the bond outranks the score."),
                ],
            ),
            q(
                "What role does love play in your major decisions?",
                [
                    o("None; I decide alone", 0, "A solo map misses half the territory."),
                    o("A quiet background factor", 1, "Love advises from the corridor."),
                    o("A real seat at the table", 2, "Your decisions have a heart chamber."),
                    o("It is the compass", 3, "You navigate by what you love."),
                ],
            ),
        ],
    },
    // Phase 5: Meaning (Spirit)
    PhaseDefinition {
        id: 5,
        title: "Meaning",
        questions: [
            q(
                "Do you know why you do what you do most days?",
                [
                    o("Honestly, no", 0, "Days without a why belong to someone else."),
                    o("I assume there's a reason", 1, "The reason exists; go meet it."),
                    o("Mostly yes", 2, "Your days answer to a purpose, most of the time."),
                    o("Yes, precisely", 3, "Your why is load-bearing."),
                ],
            ),
            q(
                "How often does your work feel meaningful?",
                [
                    o("Never", 0, "Meaningless effort is the most expensive kind."),
                    o("In rare flashes", 1, "The flashes are coordinates; follow them."),
                    o("Often", 2, "Your effort and your values overlap."),
                    o("Almost always", 3, "You built your work on your meaning."),
                ],
            ),
            q(
                "Can you name your three deepest values without hesitation?",
                [
                    o("No", 0, "Unnamed values cannot defend you."),
                    o("I'd need time", 1, "They're in the house; find the room."),
                    o("Yes, roughly", 2, "Your core has a vocabulary."),
                    o("Instantly", 3, "Your values are at hand like tools."),
                ],
            ),
            q(
                "When did you last feel part of something larger than yourself?",
                [
                    o("I don't recall ever", 0, "The larger story hasn't been introduced to you yet."),
                    o("Years ago", 1, "The echo is old but still audible."),
                    o("Within the past year", 2, "You still touch the bigger current."),
                    o("Recently", 3, "You live inside a larger story, consciously."),
                ],
            ),
            q(
                "How do you respond to the question: what is your life for?",
                [
                    o("I avoid it", -1, "Avoided questions collect interest."),
                    o("With discomfort", 1, "The discomfort is the door."),
                    o("With a working answer", 2, "A draft answer beats a blank page."),
                    o("With quiet certainty", 3, "You have made peace with the largest question."),
                ],
            ),
            q(
                "Does your calendar reflect what you say matters?",
                [
                    o("Not at all", 0, "The calendar is the confession."),
                    o("Barely", 1, "Your priorities rent space they don't use."),
                    o("Largely", 2, "You spend time where you claim to live."),
                    o("Faithfully", 3, "Your hours and your values are aligned."),
                ],
            ),
            q(
                "What happens inside you during great music, art, or landscapes?",
                [
                    o("Nothing much", 0, "The receiver may be switched off, not broken."),
                    o("A faint stir", 1, "Something in you leans toward the light."),
                    o("Real elevation", 2, "Beauty still reaches your deep rooms."),
                    o("I'm moved to tears or silence", 3, "You are permeable to the sublime."),
                ],
            ),
            q(
                "If money vanished as a concern, would your days change?",
                [
                    o("Completely", 0, "You are living someone else's schedule."),
                    o("Substantially", 1, "Part of your life is collateral."),
                    o("Somewhat", 2, "Much of your life is already chosen."),
                    o("Barely", 3, "You already live close to your meaning."),
                ],
            ),
            q(
                "Do you have a practice that connects you to what matters?",
                [
                    o("None", 0, "Meaning without practice is a rumor."),
                    o("Occasionally, by accident", 1, "Make the accident a habit."),
                    o("A regular one", 2, "You keep an appointment with depth."),
                    o("A daily one", 3, "Your roots are watered every day."),
                ],
            ),
            q(
                "When life gets hard, what keeps you going?",
                [
                    o("Inertia", 0, "Momentum without meaning runs out."),
                    o("Obligation", 1, "Duty carries; purpose lifts."),
                    o("People and purpose", 2, "Your reasons have names and faces."),
                    o("A clear sense of why", 3, "Your why outlasts any how."),
                ],
            ),
        ],
    },
    // Phase 6: Ambition (Drive)
    PhaseDefinition {
        id: 6,
        title: "Ambition",
        questions: [
            q(
                "Do you have goals written down anywhere?",
                [
                    o("No goals at all", 0, "Unwritten goals dissolve in daily noise."),
                    o("In my head only", 1, "The head is a leaky vault."),
                    o("Some, written", 2, "Ink gives your ambition a spine."),
                    o("Written and reviewed", 3, "You run your ambition like a project."),
                ],
            ),
            q(
                "How do you feel about where you are professionally?",
                [
                    o("Defeated", -1, "A verdict is not a destiny."),
                    o("Restless and stuck", 1, "Restlessness is fuel awaiting a direction."),
                    o("Progressing", 2, "The climb is real and you are on it."),
                    o("Exactly on path", 3, "Your position matches your intention."),
                ],
            ),
            q(
                "When you achieve something, what happens next?",
                [
                    o("I barely notice", 0, "Unmarked wins teach nothing."),
                    o("Brief relief, then anxiety", 1, "The finish line keeps moving on you."),
                    o("I celebrate, then aim again", 2, "You harvest and then replant."),
                    o("I bank it and raise the bar", 3, "Your wins compound."),
                ],
            ),
            q(
                "How do you handle competition?",
                [
                    o("I avoid competing", 0, "Avoided arenas still charge admission."),
                    o("It intimidates me", 1, "The opponent in your head is the hardest one."),
                    o("It sharpens me", 2, "Rivals are your whetstone."),
                    o("I seek worthy rivals", 3, "You choose opponents who raise your game."),
                ],
            ),
            q(
                "What is your relationship with risk?",
                [
                    o("I refuse all risk", 0, "The safest harbor still rots hulls."),
                    o("I take tiny ones", 1, "Small stakes buy small futures."),
                    o("Calculated bets", 2, "You price risk instead of fearing it."),
                    o("Bold, studied moves", 3, "You bet meaningfully on yourself."),
                ],
            ),
            q(
                "How often do you invest in your own skills?",
                [
                    o("Never", 0, "An unsharpened axe works twice as hard."),
                    o("When forced", 1, "Growth shouldn't need a summons."),
                    o("Several times a year", 2, "You keep your tools bright."),
                    o("Continuously", 3, "You are your own best investment."),
                ],
            ),
            q(
                "When others doubt your plans, what do you do?",
                [
                    o("I quietly drop them", 0, "Borrowed doubt is still debt."),
                    o("I waver", 1, "Other voices share your steering wheel."),
                    o("I listen, then decide", 2, "Counsel in, verdict yours."),
                    o("I let results answer", 3, "You argue with outcomes, not words."),
                ],
            ),
            q(
                "Do you finish hard things even when no one is watching?",
                [
                    o("Rarely", 0, "An audience is a crutch for the will."),
                    o("Sometimes", 1, "Your standards attend only some rehearsals."),
                    o("Usually", 2, "Your integrity works the night shift."),
                    o("Always", 3, "You perform for the person in the mirror."),
                ],
            ),
            q(
                "Where does your ambition come from?",
                [
                    o("I don't feel ambition", 0, "The engine is idle, not absent."),
                    o("Proving others wrong", 1, "Spite burns hot and dirty."),
                    o("Building something real", 2, "You are pulled, not pushed."),
                    o("A vision I can see", 3, "You work from a blueprint of the future."),
                ],
            ),
            q(
                "Five years from now, do you know what you want to have built?",
                [
                    o("No image at all", 0, "No target, no trajectory."),
                    o("A fog", 1, "Shapes move in the mist; name one."),
                    o("A sketch", 2, "The draft exists; keep drawing."),
                    o("A vivid picture", 3, "Your future already has coordinates."),
                ],
            ),
        ],
    },
    // Phase 7: Compassion (Heart)
    PhaseDefinition {
        id: 7,
        title: "Compassion",
        questions: [
            q(
                "When someone shares a problem, what is your first instinct?",
                [
                    o("Change the subject", 0, "A turned back teaches people to stop knocking."),
                    o("Fix it immediately", 1, "Sometimes the fix is to witness, not to repair."),
                    o("Listen first", 2, "Your ear arrives before your advice."),
                    o("Listen until they're empty", 3, "You offer the rarest gift: room."),
                ],
            ),
            q(
                "How often do you help without being asked?",
                [
                    o("Almost never", 0, "Unoffered hands stay empty too."),
                    o("When it's convenient", 1, "Convenience is a narrow door for kindness."),
                    o("Regularly", 2, "You notice needs before they're spoken."),
                    o("It's a reflex", 3, "Helping is your default setting."),
                ],
            ),
            q(
                "Can you feel what another person feels, physically?",
                [
                    o("No, I observe from outside", 0, "The glass between you can be opened."),
                    o("Occasionally", 1, "The bridge exists; cross it more."),
                    o("Often", 2, "Other hearts broadcast and you receive."),
                    o("Almost too much", 3, "You live with open borders."),
                ],
            ),
            q(
                "What do you do with beggars, strangers, the inconvenient?",
                [
                    o("I look away", 0, "The averted eye still saw."),
                    o("I feel bad and pass", 1, "Guilt is compassion without hands."),
                    o("I give when I can", 2, "Your mercy has a budget and spends it."),
                    o("I see them, always", 3, "You refuse to unsee anyone."),
                ],
            ),
            q(
                "How do you treat people who can do nothing for you?",
                [
                    o("I barely register them", 0, "Invisible people are a mirror's blind spot."),
                    o("Politely, distantly", 1, "Courtesy is the lobby of kindness."),
                    o("With genuine warmth", 2, "Your kindness doesn't check credentials."),
                    o("Exactly like the powerful", 3, "Your respect has no price tags."),
                ],
            ),
            q(
                "When you are wronged, how long until you can wish the person well?",
                [
                    o("Never", -1, "An unforgiven debt bills the creditor."),
                    o("Years", 1, "The thaw is slow but real."),
                    o("Weeks", 2, "Your heart reopens on a schedule."),
                    o("Days or less", 3, "You release quickly and travel light."),
                ],
            ),
            q(
                "Do you cry, or feel moved, at others' stories?",
                [
                    o("Never", 0, "Dry eyes can mean drought."),
                    o("Rarely", 1, "The well is deep; lower the bucket."),
                    o("Sometimes", 2, "Other lives reach your waterline."),
                    o("Easily", 3, "Your empathy sits close to the surface."),
                ],
            ),
            q(
                "How much of your giving is secret?",
                [
                    o("I don't give", 0, "The muscle atrophies unused."),
                    o("I give visibly", 1, "Seen giving is giving, with a receipt."),
                    o("Some is secret", 2, "Part of your kindness needs no witness."),
                    o("The best of it", 3, "You give in the dark and it lights you."),
                ],
            ),
            q(
                "Who depends on your care right now?",
                [
                    o("No one", 0, "Unneeded is a solvable condition."),
                    o("I'm not sure", 1, "Someone is waiting; look around."),
                    o("A few people", 2, "You are somebody's standing ground."),
                    o("Several, and I show up", 3, "You are infrastructure for other lives."),
                ],
            ),
            q(
                "Is your compassion ever extended to yourself?",
                [
                    o("Never; I'm hardest on me", 0, "The one person you can't leave gets the worst of you."),
                    o("Rarely", 1, "Mercy should begin at home sometimes."),
                    o("Increasingly", 2, "You are learning to be on your own side."),
                    o("Yes, deliberately", 3, "Your kindness includes its own source."),
                ],
            ),
        ],
    },
    // Phase 8: Reflection (Mind)
    PhaseDefinition {
        id: 8,
        title: "Reflection",
        questions: [
            q(
                "How often are you alone with your thoughts, without a screen?",
                [
                    o("Never, it unnerves me", 0, "Avoided silence grows louder."),
                    o("A few minutes a week", 1, "The inner room is barely visited."),
                    o("Regular pockets of quiet", 2, "You keep appointments with yourself."),
                    o("Daily, on purpose", 3, "Solitude is your consulting room."),
                ],
            ),
            q(
                "Can you name what you're feeling right now?",
                [
                    o("No idea", 0, "Unnamed weather still soaks you."),
                    o("Vaguely good or bad", 1, "Your inner vocabulary wants more words."),
                    o("Usually, yes", 2, "You read your own instruments."),
                    o("Precisely, and its cause", 3, "You are fluent in yourself."),
                ],
            ),
            q(
                "Do you keep any record of your inner life?",
                [
                    o("Nothing", 0, "An unrecorded life is easy to misremember."),
                    o("Rare scattered notes", 1, "Fragments hint at the missing journal."),
                    o("Periodic journaling", 2, "You leave yourself a trail of evidence."),
                    o("A steady practice", 3, "Your inner life has an archive."),
                ],
            ),
            q(
                "When you react strongly, do you later examine why?",
                [
                    o("No, I move on", 0, "Unexamined storms return on schedule."),
                    o("Sometimes, briefly", 1, "The post-mortem is short but real."),
                    o("Usually", 2, "Your triggers get interviewed."),
                    o("Always, it's a rule", 3, "Every eruption becomes a map."),
                ],
            ),
            q(
                "How accurate is your picture of how others see you?",
                [
                    o("I have no idea", 0, "The outside view is a missing sense."),
                    o("Probably flattering", 1, "The mirror may be airbrushed."),
                    o("Fairly accurate", 2, "You triangulate yourself honestly."),
                    o("Verified by asking", 3, "You audit your reflection with real data."),
                ],
            ),
            q(
                "What do you do with envy when it visits?",
                [
                    o("Deny it", -1, "Denied envy tunnels underground."),
                    o("Marinate in it", 1, "Envy held too long pickles the heart."),
                    o("Read it as a signal", 2, "Your envy points at buried wishes."),
                    o("Convert it to direction", 3, "You turned the poison into a compass."),
                ],
            ),
            q(
                "Do you know your recurring self-sabotage pattern?",
                [
                    o("I don't have one", 0, "Everyone has one; yours works unsupervised."),
                    o("I suspect something", 1, "The saboteur has left fingerprints."),
                    o("I can describe it", 2, "You've photographed the intruder."),
                    o("I catch it in the act", 3, "You interrupt your own worst play."),
                ],
            ),
            q(
                "How do you speak to yourself after a failure?",
                [
                    o("Brutally", 0, "You'd never let anyone else talk to you that way."),
                    o("Coldly", 1, "The inner judge could use a heart."),
                    o("Fairly", 2, "Your verdicts include the evidence for you."),
                    o("Like a good coach", 3, "Your inner voice builds what it reviews."),
                ],
            ),
            q(
                "Which question about yourself do you most avoid?",
                [
                    o("I avoid the whole topic", 0, "The avoided question is the address."),
                    o("I know it exists", 1, "You've seen the door you don't open."),
                    o("I circle it sometimes", 2, "The orbit is tightening."),
                    o("I've walked into it", 3, "You interrogate your own dark."),
                ],
            ),
            q(
                "After an important year, do you review it?",
                [
                    o("Never", 0, "Unreviewed years repeat themselves."),
                    o("A passing thought", 1, "The glance wants to become a look."),
                    o("An honest look back", 2, "You close your years deliberately."),
                    o("A written reckoning", 3, "Your years end with minutes and action items."),
                ],
            ),
        ],
    },
    // Phase 9: Transcendence (Spirit)
    PhaseDefinition {
        id: 9,
        title: "Transcendence",
        questions: [
            q(
                "Do you experience moments of awe?",
                [
                    o("Never", 0, "Awe is a sense; yours may be asleep."),
                    o("Rarely", 1, "The sky still works; look up more."),
                    o("Several times a year", 2, "The vast still visits you."),
                    o("Often, even in small things", 3, "You find cathedrals in crumbs."),
                ],
            ),
            q(
                "What is your relationship with silence?",
                [
                    o("I avoid it with noise", 0, "Constant noise is a hiding place."),
                    o("Uneasy truce", 1, "Silence and you are distant relatives."),
                    o("Comfortable", 2, "You can sit in the quiet without flinching."),
                    o("I seek it out", 3, "Silence is where you refuel."),
                ],
            ),
            q(
                "Do you practice any form of meditation, prayer, or contemplation?",
                [
                    o("None", 0, "The deepest room in the house is unvisited."),
                    o("Tried, abandoned", 1, "The door is unlocked; you've touched the handle."),
                    o("Irregularly", 2, "You visit the well, if not daily."),
                    o("A steady practice", 3, "You keep a standing appointment with depth."),
                ],
            ),
            q(
                "How do you relate to your own mortality?",
                [
                    o("I refuse to think about it", -1, "The unfaced end distorts the middle."),
                    o("With dread", 1, "The fear is honest; let it teach."),
                    o("With sober acceptance", 2, "Death has a seat at your table, not the head."),
                    o("It sharpens my days", 3, "You let finitude focus you."),
                ],
            ),
            q(
                "Do you feel gratitude without a specific reason?",
                [
                    o("No, gratitude needs causes", 0, "Conditional gratitude starves in winter."),
                    o("On rare good days", 1, "The sun sometimes gets through."),
                    o("Often", 2, "Your baseline includes thankfulness."),
                    o("It's my default state", 3, "You are grateful the way water is wet."),
                ],
            ),
            q(
                "When nature surrounds you, what changes?",
                [
                    o("Nothing", 0, "The oldest medicine goes untaken."),
                    o("Mild relaxation", 1, "The forest whispers; lean closer."),
                    o("Real restoration", 2, "Green places reset your instruments."),
                    o("Something like worship", 3, "Nature is your standing temple."),
                ],
            ),
            q(
                "Do you believe something endures beyond a single life?",
                [
                    o("Nothing endures", 0, "Even that certainty deserves a question."),
                    o("I don't know and don't ask", 1, "The question waits politely."),
                    o("I hold a quiet hope", 2, "Hope is a hypothesis you live by."),
                    o("A conviction that steadies me", 3, "Your roots reach below the visible."),
                ],
            ),
            q(
                "How do you handle experiences you cannot explain?",
                [
                    o("Dismiss them", 0, "The discarded data may be the signal."),
                    o("File them away uneasily", 1, "The unexplained drawer is filling."),
                    o("Hold them with curiosity", 2, "Mystery gets a fair hearing from you."),
                    o("Treasure them", 3, "You keep the inexplicable like letters."),
                ],
            ),
            q(
                "Is there a larger rhythm you try to live in step with?",
                [
                    o("No such thing", 0, "Even seasons argue otherwise."),
                    o("I've sensed one", 1, "The beat is faint but audible."),
                    o("I try to align with it", 2, "You tune yourself to the larger music."),
                    o("I live inside it", 3, "Your tempo and the world's agree."),
                ],
            ),
            q(
                "What happens to your problems when you zoom all the way out?",
                [
                    o("They stay the same size", 0, "Perspective is a lens you haven't used."),
                    o("Briefly smaller, then back", 1, "The zoom works; hold it longer."),
                    o("They find their true size", 2, "The mountain view rescales your worries."),
                    o("They mostly dissolve", 3, "You live with the wide-angle lens on."),
                ],
            ),
        ],
    },
    // Phase 10: Legacy (Spirit)
    PhaseDefinition {
        id: 10,
        title: "Legacy",
        questions: [
            q(
                "What are you building that will outlast you?",
                [
                    o("Nothing I can name", 0, "The monument is unstarted, not impossible."),
                    o("Vague intentions", 1, "Intentions need masonry."),
                    o("Something underway", 2, "Your brick is already in the wall."),
                    o("A clear, growing work", 3, "You build for people you'll never meet."),
                ],
            ),
            q(
                "Do younger people learn anything from you?",
                [
                    o("I avoid that role", 0, "Your lessons die unshipped."),
                    o("Accidentally, maybe", 1, "Teaching is happening; claim it."),
                    o("Yes, informally", 2, "Your experience is already in circulation."),
                    o("Yes, I mentor deliberately", 3, "You are someone's living library."),
                ],
            ),
            q(
                "How do you want to be remembered?",
                [
                    o("I never think about it", 0, "Unchosen legacies get written anyway."),
                    o("It worries me", 1, "The worry is the first draft of intention."),
                    o("I have a phrase in mind", 2, "Your epitaph is drafted; live toward it."),
                    o("I know, and I live by it", 3, "You are writing the remembrance daily."),
                ],
            ),
            q(
                "What do you create, in any medium?",
                [
                    o("I only consume", 0, "A life of intake leaves no trace."),
                    o("I used to create", 1, "The instrument is in the attic, not broken."),
                    o("I make things sometimes", 2, "Your hands still add to the world."),
                    o("Creation is central to me", 3, "You leave artifacts wherever you go."),
                ],
            ),
            q(
                "Have you told the people you love what you'd want them to know at the end?",
                [
                    o("Never; too morbid", 0, "The unsaid becomes the unsayable."),
                    o("I assume they know", 1, "Assumption is a fragile envelope."),
                    o("Partially", 2, "The letter is half-written; finish it."),
                    o("Yes, explicitly", 3, "Nothing essential is left unsaid."),
                ],
            ),
            q(
                "What is your relationship with time?",
                [
                    o("It slips away from me", -1, "Unwatched time is quietly stolen."),
                    o("We are at war", 1, "Fighting time always loses; partner with it."),
                    o("Respectful cooperation", 2, "You spend time like the currency it is."),
                    o("Deep friendship", 3, "Time works for you because you honor it."),
                ],
            ),
            q(
                "If your life's work stopped today, what would remain?",
                [
                    o("Very little", 0, "Start the thing that would remain."),
                    o("Some scattered traces", 1, "Gather the traces into a path."),
                    o("A real contribution", 2, "The ledger already shows your deposit."),
                    o("A foundation others stand on", 3, "You have become ground for other lives."),
                ],
            ),
            q(
                "Do you tend anything that will bloom after you're gone?",
                [
                    o("No", 0, "Plant one tree whose shade you'll never sit in."),
                    o("I've thought about it", 1, "The seed is in your pocket."),
                    o("Yes, a few things", 2, "Future springs already owe you."),
                    o("It shapes most of my choices", 3, "You garden in decades."),
                ],
            ),
            q(
                "What story do your possessions tell about you?",
                [
                    o("Accumulation without meaning", 0, "Objects can bury a story."),
                    o("Comfort, mostly", 1, "Your things serve today; what serves tomorrow?"),
                    o("Chosen, meaningful things", 2, "Your shelves are a curated autobiography."),
                    o("Little; I travel light", 3, "Your legacy was never going to be things."),
                ],
            ),
            q(
                "When you imagine the last day, what do you feel?",
                [
                    o("Panic; I look away", 0, "The last page can teach the first ones."),
                    o("Regret gathering", 1, "Regret is a to-do list in disguise."),
                    o("Mostly peace, some items open", 2, "The accounts are nearly settled."),
                    o("Readiness and gratitude", 3, "You could sign the story as it stands."),
                ],
            ),
        ],
    },
];

/// Look up a phase definition by id, or `None` outside 1..=10.
#[inline]
pub fn phase(id: u8) -> Option<&'static PhaseDefinition> {
    if (1..=10).contains(&id) {
        Some(&PHASES[(id - 1) as usize])
    } else {
        None
    }
}
