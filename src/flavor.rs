//! Canned flavor text: keyword decorations for answers, plus the joke and
//! motivation pools behind the static commands.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Scanned in order; the first keyword found in the answer wins.
pub const KEYWORD_POOLS: &[(&str, &[&str])] = &[
    (
        "motors",
        &[
            "🔥 Remember: if your motors come down hot, your tune is not.",
            "🌀 Motors spinning? Props off while you test, always.",
            "⚙️ Pro tip: check those motor screws aren't touching the windings.",
        ],
    ),
    (
        "props",
        &[
            "🪓 Props are consumables. Buy them by the bucket.",
            "🔄 Double-check prop direction before the next pack.",
        ],
    ),
    (
        "lipo",
        &[
            "🔋 Storage charge those packs, your LiPos will thank you.",
            "🧯 Never leave a charging LiPo unattended.",
        ],
    ),
    (
        "crash",
        &[
            "💥 Every crash is just an unscheduled disassembly.",
            "🌳 Trees: 1, Pilot: 0. Rematch soon.",
        ],
    ),
];

pub const CELEBRATION_KEYWORDS: &[&str] = &[
    "maiden flight",
    "first flight",
    "congrats",
    "congratulations",
    "nailed it",
];

pub const CELEBRATION_LINE: &str = "🎉 Send it! Enjoy the flight! 🚁";

pub const DRONE_JOKES: &[&str] = &[
    "Why did the quad break up with the fixed wing? It needed more space to hover.",
    "My drone's favourite music? Anything with a lot of bass... and good motor noise.",
];

pub const MOTIVATION_LINES: &[&str] = &[
    "Every pro pilot was once stuck in the simulator. Keep flying! 🚁",
    "Crashes are just data points on your way to smooth lines. 💪",
];

/// Append at most one keyword line and at most one celebration line to `answer`.
pub fn decorate<R: Rng + ?Sized>(answer: &str, rng: &mut R) -> String {
    let lowered = answer.to_lowercase();
    let mut decorated = answer.to_string();

    let keyword_pool = KEYWORD_POOLS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, pool)| *pool);
    if let Some(line) = keyword_pool.and_then(|pool| pool.choose(rng)) {
        decorated.push('\n');
        decorated.push_str(line);
    }

    if CELEBRATION_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        decorated.push('\n');
        decorated.push_str(CELEBRATION_LINE);
    }

    decorated
}

pub fn random_line<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
