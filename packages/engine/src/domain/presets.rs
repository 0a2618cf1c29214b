//! Built-in pattern coordinates as (row, col) pairs.
//!
//! Offsets are arbitrary; the library normalizes each shape to its bounding
//! box before centering it on a board.

pub(crate) const GLIDER: &[(u32, u32)] = &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

pub(crate) const PULSAR: &[(u32, u32)] = &[
    (1, 2), (1, 4), (1, 6), (2, 1), (2, 3),
    (2, 5), (2, 7), (3, 2), (3, 4), (3, 6),
];

pub(crate) const GLIDER_GUN: &[(u32, u32)] = &[
    (3, 1), (3, 2), (4, 1), (4, 2), (3, 10),
    (3, 11), (4, 9), (4, 11), (5, 9), (5, 10),
    (1, 24), (1, 25), (2, 23), (2, 25), (3, 23),
    (3, 24), (1, 35), (1, 36), (2, 35), (2, 36),
    (5, 17), (5, 18), (6, 17), (6, 19), (7, 17),
    (13, 25), (14, 25), (13, 26), (15, 26), (13, 27),
    (8, 36), (9, 36), (10, 36), (8, 37), (9, 38),
];

pub(crate) const SUPERNOVA: &[(u32, u32)] = &[
    (1, 2), (2, 1), (2, 3), (3, 1), (3, 3),
    (4, 1), (4, 3), (12, 1), (12, 3), (13, 1),
    (13, 3), (14, 1), (14, 3), (15, 2),
];

pub(crate) const TUMBLER: &[(u32, u32)] = &[
    (1, 2), (1, 3), (1, 5), (1, 6), (2, 2), (2, 3),
    (2, 5), (2, 6), (3, 3), (3, 5), (4, 1), (4, 3),
    (4, 5), (4, 7), (5, 1), (5, 3), (5, 5), (5, 7),
    (6, 1), (6, 2), (6, 6), (6, 7),
];

pub(crate) const SPACESHIP: &[(u32, u32)] = &[
    (1, 4), (2, 5), (3, 1), (3, 5), (4, 2),
    (4, 3), (4, 4), (4, 5),
];

pub(crate) const TEN: &[(u32, u32)] = &[
    (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
    (1, 7), (1, 8), (1, 9), (1, 10),
];

pub(crate) const TOAD_PUSHER: &[(u32, u32)] = &[
    (2, 2), (2, 3), (1, 4), (3, 4), (2, 5), (2, 6),
    (2, 7), (2, 8), (1, 9), (3, 9), (2, 10), (2, 11),
    (9, 6), (9, 7), (9, 8), (10, 5), (10, 6), (10, 7),
    (17, 1), (17, 2), (16, 3), (18, 3), (17, 4),
    (17, 5), (17, 6), (17, 7), (16, 8), (18, 8),
    (17, 9), (17, 10),
];

pub(crate) const PUFFER: &[(u32, u32)] = &[
    (1, 5), (1, 6), (1, 7), (1, 8), (1, 9), (1, 10),
    (2, 3), (2, 4), (2, 10), (3, 1), (3, 2), (3, 4),
    (3, 10), (4, 5), (4, 9), (5, 7), (6, 7), (6, 8),
    (7, 6), (7, 7), (7, 8), (7, 9), (8, 6), (8, 7),
    (8, 9), (8, 10), (9, 8), (9, 9),
];

pub(crate) const BIG_PUFFER: &[(u32, u32)] = &[
    (1, 3), (1, 4), (1, 5), (1, 6), (1, 7), (1, 8),
    (2, 2), (2, 8), (3, 8), (4, 7), (18, 1), (17, 2),
    (17, 3), (17, 4), (17, 5), (17, 6), (18, 6),
    (19, 6), (20, 5), (10, 6), (10, 7), (9, 8), (9, 9),
    (10, 9), (11, 10), (8, 10), (8, 11), (8, 12),
    (8, 13), (8, 14), (8, 15), (9, 15), (10, 15),
    (11, 14), (12, 12), (13, 12), (13, 13), (14, 11),
    (14, 12), (14, 13), (14, 14), (15, 11), (15, 12),
    (15, 14), (15, 15), (16, 13), (16, 14),
];

pub(crate) const LOBSTER: &[(u32, u32)] = &[
    (1, 12), (1, 13), (1, 14), (2, 14), (3, 13), (3, 9),
    (3, 10), (4, 9), (4, 10), (5, 13), (5, 14), (6, 12),
    (6, 13), (7, 11), (7, 14), (9, 12), (10, 12),
    (11, 11), (11, 10), (11, 9), (9, 9), (10, 8),
    (11, 7), (12, 6), (13, 6), (14, 7), (16, 8), (16, 9),
    (17, 9), (18, 10), (18, 11), (19, 11), (20, 13),
    (21, 14), (21, 15), (20, 16), (19, 17), (18, 18),
    (18, 16), (17, 16), (16, 16), (15, 17), (15, 18),
    (13, 20), (13, 22), (14, 21), (14, 22), (15, 21),
    (16, 20), (17, 23), (17, 24), (18, 23), (18, 24),
    (14, 24), (13, 25), (13, 26), (14, 26), (15, 26),
    (16, 1), (15, 2), (15, 3), (16, 4), (16, 5), (17, 6),
    (19, 3), (19, 7), (20, 7), (20, 8), (21, 4), (21, 2),
    (22, 1), (22, 2), (23, 6), (24, 8), (25, 5), (25, 6),
    (26, 5), (26, 11), (25, 12), (24, 12), (23, 11),
    (22, 11), (21, 10),
];

/// Registration order is the order the UI lists them in.
pub(crate) const BUILTIN_PATTERNS: &[(&str, &[(u32, u32)])] = &[
    ("glider", GLIDER),
    ("pulsar", PULSAR),
    ("gliderGun", GLIDER_GUN),
    ("supernova", SUPERNOVA),
    ("tumbler", TUMBLER),
    ("spaceship", SPACESHIP),
    ("ten", TEN),
    ("toadPusher", TOAD_PUSHER),
    ("puffer", PUFFER),
    ("bigPuffer", BIG_PUFFER),
    ("lobster", LOBSTER),
];
