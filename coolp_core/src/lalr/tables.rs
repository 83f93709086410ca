//! Compressed LALR(1) tables of the COOL grammar
//!
//! The layout is the classic row-displacement scheme: the action for `(state, terminal)`
//! lives at `TABLE[PACT[state] + terminal]` when `CHECK` at that index holds `terminal`,
//! and falls back to `DEFACT[state]` otherwise. Gotos are displaced by nonterminal in the
//! same `TABLE`/`CHECK` pair. The three relational operators reduce on a following
//! relational operator, so comparisons chain to the left.

/// `PACT` value of states that never consult the lookahead
pub(crate) const PACT_DEFAULT: i16 = -126;

/// `TABLE` value of an explicit syntax error
pub(crate) const TABLE_ERROR: i16 = -12;

/// Highest valid index into `TABLE` and `CHECK`
pub(crate) const LAST: usize = 330;

pub(crate) const STATE_COUNT: usize = 158;

/// Displacement of each state's row in `TABLE`; `PACT_DEFAULT` means the
/// state only ever takes its default action.
pub(crate) static PACT: [i16; STATE_COUNT] = [
    6, 3, 69, 6, -126, -24, -7, -126, -126, 11,
    -1, 22, 14, -9, 31, 78, 66, 70, 19, 72,
    82, -126, 85, 100, 84, 88, -126, 27, 89, 95,
    -126, 94, 35, -126, 116, -126, -126, 104, 107, -126,
    -126, 122, 105, 85, 143, 114, -126, 132, -126, 143,
    1, 143, 143, 135, 143, -126, -126, -126, -14, 143,
    143, 54, 143, 282, -126, 121, 198, 13, 117, -126,
    172, 210, -126, 28, 143, 143, 282, 28, 128, 235,
    112, 221, 143, 143, 143, 143, 143, 143, 143, 147,
    148, 143, 143, 143, 1, 150, 143, 151, 282, 282,
    40, -126, -126, -126, 247, -126, 293, 293, 293, 106,
    106, 28, 28, 134, 133, 271, 67, 282, -126, 12,
    185, 136, 9, -126, -126, 143, -126, 152, 143, -126,
    143, 143, 143, 1, -126, 154, -126, -126, 282, 139,
    41, 161, 282, 83, -126, 166, 143, -126, -126, 143,
    1, 143, 49, 282, -126, 259, -126, -126,
];

/// Default reduction of each state, `0` meaning syntax error.
pub(crate) static DEFACT: [u8; STATE_COUNT] = [
    0, 0, 0, 2, 3, 0, 0, 1, 4, 0,
    0, 0, 0, 0, 0, 10, 0, 0, 0, 0,
    0, 14, 20, 0, 0, 0, 12, 0, 0, 0,
    9, 0, 0, 18, 16, 8, 13, 0, 0, 7,
    5, 0, 0, 0, 0, 0, 21, 0, 19, 0,
    0, 0, 0, 0, 0, 45, 44, 46, 43, 0,
    0, 0, 0, 17, 6, 0, 0, 0, 0, 29,
    0, 0, 31, 32, 0, 58, 41, 37, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 22, 56,
    0, 55, 53, 28, 0, 42, 39, 38, 40, 33,
    34, 35, 36, 0, 0, 0, 0, 51, 52, 0,
    0, 0, 0, 59, 25, 0, 54, 0, 58, 15,
    0, 0, 0, 0, 27, 0, 30, 60, 57, 0,
    0, 0, 47, 0, 49, 0, 58, 23, 26, 0,
    0, 0, 0, 48, 50, 0, 24, 61,
];

/// Displacement of each nonterminal's goto column in `TABLE`.
pub(crate) static PGOTO: [i16; 15] = [
    -126, -126, -126, 182, 2, -126, 171, -126, 144, -44,
    -88, -126, -125, -126, 91,
];

/// Goto target used when the displaced lookup misses.
pub(crate) static DEFGOTO: [i16; 15] = [
    -1, 2, 3, 4, 14, 15, 16, 32, 33, 99,
    69, 80, 100, 122, 123,
];

/// Packed actions: positive shifts, negative reduces, `TABLE_ERROR` rejects.
pub(crate) static TABLE: [i16; LAST + 1] = [
    63, 10, 67, 140, 5, 66, 118, 70, 71, 1,
    73, 74, 12, 19, 9, 76, 77, 79, 81, 131,
    93, 152, 17, 18, 136, 68, 6, 75, 37, 38,
    98, 11, 22, 121, 23, 13, 104, 132, 106, 107,
    108, 109, 110, 111, 112, 144, 13, 115, 116, 117,
    -11, 13, 120, 20, 21, 78, 133, 94, 28, 21,
    49, -11, 154, 50, 89, 90, -11, 51, 52, 7,
    24, 130, 53, 54, 55, 56, 57, 42, 58, 43,
    59, 138, 124, 147, 125, 125, 141, 142, 143, 60,
    149, 156, 61, 125, 82, 62, 83, 84, 85, 86,
    87, 88, 13, 89, 90, 153, 26, 155, 27, 31,
    82, 29, 83, 84, 85, 86, 87, 88, 49, 89,
    90, 50, 30, 34, 35, 51, 52, 150, 36, 39,
    53, 54, 55, 56, 57, 40, 58, 41, 59, 87,
    88, 44, 89, 90, 21, 46, 45, 60, 47, 49,
    61, 103, 50, 62, 64, 65, 51, 52, 72, 91,
    95, 53, 54, 55, 56, 57, 148, 58, 101, 59,
    113, 127, 114, 119, 128, 121, 139, 145, 60, 135,
    146, 61, 96, 151, 62, 8, 25, 48, 82, 0,
    83, 84, 85, 86, 87, 88, 134, 89, 90, 82,
    0, 83, 84, 85, 86, 87, 88, 0, 89, 90,
    92, 0, 82, 137, 83, 84, 85, 86, 87, 88,
    0, 89, 90, 0, 0, 82, 97, 83, 84, 85,
    86, 87, 88, 0, 89, 90, 0, 82, 0, 83,
    84, 85, 86, 87, 88, 0, 89, 90, 82, 0,
    83, 84, 85, 86, 87, 88, 0, 89, 90, 0,
    0, 0, 82, 105, 83, 84, 85, 86, 87, 88,
    0, 89, 90, 0, 82, 102, 83, 84, 85, 86,
    87, 88, 0, 89, 90, 0, 82, 126, 83, 84,
    85, 86, 87, 88, 0, 89, 90, 0, 82, 157,
    83, 84, 85, 86, 87, 88, 0, 89, 90, 82,
    129, 83, 84, 85, 86, 87, 88, 0, 89, 90,
    -12, 0, -12, -12, 85, 86, 87, 88, 0, 89,
    90,
];

/// Owner of each `TABLE` slot; a lookup is valid only when it matches.
pub(crate) static CHECK: [i16; LAST + 1] = [
    44, 8, 1, 128, 1, 49, 94, 51, 52, 3,
    54, 25, 1, 11, 38, 59, 60, 61, 62, 7,
    7, 146, 23, 1, 15, 24, 23, 41, 1, 27,
    74, 38, 41, 24, 43, 24, 80, 25, 82, 83,
    84, 85, 86, 87, 88, 133, 24, 91, 92, 93,
    39, 24, 96, 39, 40, 1, 44, 44, 39, 40,
    6, 39, 150, 9, 36, 37, 39, 13, 14, 0,
    39, 4, 18, 19, 20, 21, 22, 42, 24, 44,
    26, 125, 42, 42, 44, 44, 130, 131, 132, 35,
    7, 42, 38, 44, 27, 41, 29, 30, 31, 32,
    33, 34, 24, 36, 37, 149, 40, 151, 38, 24,
    27, 39, 29, 30, 31, 32, 33, 34, 6, 36,
    37, 9, 40, 23, 40, 13, 14, 44, 40, 40,
    18, 19, 20, 21, 22, 40, 24, 43, 26, 33,
    34, 25, 36, 37, 40, 23, 39, 35, 43, 6,
    38, 39, 9, 41, 40, 23, 13, 14, 23, 38,
    43, 18, 19, 20, 21, 22, 5, 24, 40, 26,
    23, 37, 24, 23, 41, 24, 24, 23, 35, 43,
    41, 38, 10, 17, 41, 3, 15, 43, 27, -1,
    29, 30, 31, 32, 33, 34, 11, 36, 37, 27,
    -1, 29, 30, 31, 32, 33, 34, -1, 36, 37,
    12, -1, 27, 122, 29, 30, 31, 32, 33, 34,
    -1, 36, 37, -1, -1, 27, 16, 29, 30, 31,
    32, 33, 34, -1, 36, 37, -1, 27, -1, 29,
    30, 31, 32, 33, 34, -1, 36, 37, 27, -1,
    29, 30, 31, 32, 33, 34, -1, 36, 37, -1,
    -1, -1, 27, 42, 29, 30, 31, 32, 33, 34,
    -1, 36, 37, -1, 27, 40, 29, 30, 31, 32,
    33, 34, -1, 36, 37, -1, 27, 40, 29, 30,
    31, 32, 33, 34, -1, 36, 37, -1, 27, 40,
    29, 30, 31, 32, 33, 34, -1, 36, 37, 27,
    39, 29, 30, 31, 32, 33, 34, -1, 36, 37,
    -1, -1, -1, -1, 31, 32, 33, 34, -1, 36,
    37,
];

/// Symbol number that leads into each state.
pub(crate) static STOS: [u8; STATE_COUNT] = [
    0, 3, 46, 47, 48, 1, 23, 0, 48, 38,
    8, 38, 1, 24, 49, 50, 51, 23, 1, 49,
    39, 40, 41, 43, 39, 51, 40, 38, 39, 39,
    40, 24, 52, 53, 23, 40, 40, 1, 49, 40,
    40, 43, 42, 44, 25, 39, 23, 43, 53, 6,
    9, 13, 14, 18, 19, 20, 21, 22, 24, 26,
    35, 38, 41, 54, 40, 23, 54, 1, 24, 55,
    54, 54, 23, 54, 25, 41, 54, 54, 1, 54,
    56, 54, 27, 29, 30, 31, 32, 33, 34, 36,
    37, 38, 12, 7, 44, 43, 10, 16, 54, 54,
    57, 40, 40, 39, 54, 42, 54, 54, 54, 54,
    54, 54, 54, 23, 24, 54, 54, 54, 55, 23,
    54, 24, 58, 59, 42, 44, 40, 37, 41, 39,
    4, 7, 25, 44, 11, 43, 15, 59, 54, 24,
    57, 54, 54, 54, 55, 23, 41, 42, 5, 7,
    44, 17, 57, 54, 55, 54, 42, 40,
];
