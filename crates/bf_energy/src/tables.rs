//! Literature-derived free energy tables at 37 degrees Celsius.
//!
//! Nearest-neighbor parameters in the Turner 2004 style: every entry is an
//! integer in hundredths of kcal/mol and comes with a matching enthalpy so
//! that [`crate::EnergyParams`] can rescale it to other temperatures.
//! Canonical pair rows are ordered CG, GC, GU, UG, AU, UA; tables indexed
//! by all 8 pair-type classes keep zeroed rows for `NoPair` and `NS`.
//!
//! This module is pure data. All lookups go through `EnergyParams`.

/// Sentinel for forbidden entries; never temperature-rescaled.
pub const INF: i32 = 10_000_000;

/// Longest single loop (bulge/interior) considered by either engine.
pub const MAX_LOOP: usize = 30;

/// Logarithmic extrapolation coefficient for loops longer than 30,
/// `E(L) = E(30) + LXC37 * ln(L / 30)`, in hundredths of kcal/mol.
pub const LXC37: f64 = 107.856;

/// Terminal AU/GU end penalty (dG37, dH).
pub const TERMINAL_AU: (i32, i32) = (50, 370);

/// Multiloop closing penalty (dG37, dH).
pub const ML_CLOSING: (i32, i32) = (340, 3000);

/// Multiloop per-stem penalty (dG37, dH).
pub const ML_INTERN: (i32, i32) = (40, -90);

/// Multiloop per-unpaired-base penalty (dG37, dH).
pub const ML_BASE: (i32, i32) = (0, 0);

/// Ninio asymmetry penalty per unpaired-length difference (dG37, dH),
/// capped at [`MAX_NINIO`].
pub const NINIO: (i32, i32) = (60, 320);

/// Cap for the accumulated ninio asymmetry penalty.
pub const MAX_NINIO: i32 = 300;


/// Helix stacking free energies dG37, outer pair x inner pair.
pub const STACK_DG: [[i32; 6]; 6] = [
    //       CG     GC     GU     UG     AU     UA
    [ -240,  -330,  -210,  -140,  -210,  -210], // CG
    [ -330,  -340,  -250,  -150,  -220,  -240], // GC
    [ -210,  -250,   130,   -50,  -140,  -130], // GU
    [ -140,  -150,   -50,    30,   -60,  -100], // UG
    [ -210,  -220,  -140,   -60,  -110,   -90], // AU
    [ -210,  -240,  -130,  -100,   -90,  -130], // UA
];

/// Helix stacking enthalpies.
pub const STACK_DH: [[i32; 6]; 6] = [
    //       CG     GC     GU     UG     AU     UA
    [-1060, -1340, -1210,  -560, -1050, -1040], // CG
    [-1340, -1490, -1260,  -830, -1140, -1240], // GC
    [-1210, -1260, -1460, -1350,  -880, -1280], // GU
    [ -560,  -830, -1350,  -930,  -320,  -700], // UG
    [-1050, -1140,  -880,  -320,  -940,  -680], // AU
    [-1040, -1240, -1280,  -700,  -680,  -770], // UA
];

/// Hairpin loop initiation dG37 by loop size.
pub const HAIRPIN_DG: [i32; 31] = [
    INF, INF, INF, 540, 560, 570, 540, 600,
    550, 640, 650, 660, 670, 678, 686, 694,
    701, 707, 713, 719, 725, 730, 735, 740,
    744, 749, 753, 757, 761, 765, 769,
];

/// Hairpin loop initiation enthalpies.
pub const HAIRPIN_DH: [i32; 31] = [
    INF, INF, INF, 130, 480, 360, -290, 130,
    -290, 500, -90, -20, -10, -30, -10, -10,
    20, 60, 100, 130, 170, 200, 230, 260,
    290, 320, 350, 370, 400, 420, 450,
];

/// Bulge loop initiation dG37 by loop size.
pub const BULGE_DG: [i32; 31] = [
    INF, 380, 280, 320, 360, 400, 440, 459,
    470, 480, 490, 500, 510, 519, 527, 534,
    541, 548, 554, 560, 565, 571, 576, 580,
    585, 589, 594, 598, 602, 605, 609,
];

/// Bulge loop initiation enthalpies.
pub const BULGE_DH: [i32; 31] = [
    INF, 1060, 710, 710, 710, 710, 710, 710,
    710, 710, 710, 710, 710, 710, 710, 710,
    710, 710, 710, 710, 710, 710, 710, 710,
    710, 710, 710, 710, 710, 710, 710,
];

/// Interior loop initiation dG37 by loop size.
pub const INTERNAL_DG: [i32; 31] = [
    INF, INF, 100, 100, 110, 200, 200, 210,
    230, 240, 250, 260, 270, 278, 286, 294,
    301, 307, 313, 319, 325, 330, 335, 340,
    345, 349, 353, 357, 361, 365, 369,
];

/// Interior loop initiation enthalpies.
pub const INTERNAL_DH: [i32; 31] = [
    INF, INF, -720, -720, -680, -130, -130, -130,
    -130, -130, -130, -130, -130, -130, -130, -130,
    -130, -130, -130, -130, -130, -130, -130, -130,
    -130, -130, -130, -130, -130, -130, -130,
];

/// 5' dangling end dG37, pair x dangling nucleotide.
pub const DANGLE5_DG: [[i32; 5]; 6] = [
    //   N     A     C     G     U
    [ -10,  -50,  -30,  -20,  -10], // CG
    [   0,  -20,  -30,    0,    0], // GC
    [ -20,  -30,  -30,  -40,  -20], // GU
    [ -10,  -30,  -10,  -20,  -20], // UG
    [ -20,  -30,  -30,  -40,  -20], // AU
    [ -10,  -30,  -10,  -20,  -20], // UA
];

/// 5' dangling end enthalpies.
pub const DANGLE5_DH: [[i32; 5]; 6] = [
    //   N     A     C     G     U
    [ -40, -160,  -80,  -40,  -50], // CG
    [   0,  -50,  -70,  -20,  -10], // GC
    [ -50,  -70, -110, -130,  -60], // GU
    [ -10, -110,  -40,  -60,  -50], // UG
    [ -80, -100,  -90, -110,  -40], // AU
    [ -40,  -90,  -20,  -40,  -80], // UA
];

/// 3' dangling end dG37, pair x dangling nucleotide.
pub const DANGLE3_DG: [[i32; 5]; 6] = [
    //   N     A     C     G     U
    [ -40, -110,  -40, -130,  -60], // CG
    [ -80, -170,  -80, -170, -120], // GC
    [ -10,  -70,  -10,  -70,  -10], // GU
    [ -50,  -80,  -50,  -80,  -60], // UG
    [ -10,  -70,  -10,  -70,  -10], // AU
    [ -50,  -80,  -50,  -80,  -60], // UA
];

/// 3' dangling end enthalpies.
pub const DANGLE3_DH: [[i32; 5]; 6] = [
    //   N     A     C     G     U
    [-100, -360, -130, -400, -180], // CG
    [-270, -540, -250, -520, -350], // GC
    [ -10, -240,  -40, -220,  -20], // GU
    [-180, -260, -160, -240, -170], // UG
    [ -40, -220,  -20, -200,  -50], // AU
    [-160, -240, -140, -270, -200], // UA
];

/// Hairpin terminal mismatch dG37, closing pair x 5' x 3' nucleotide.
pub const MISMATCH_HAIRPIN_DG: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [  -70,   -70,   -60,   -50,   -40],
        [  -40,  -100,  -110,  -220,   -90],
        [  -80,  -120,   -70,   -90,  -100],
        [  -70,  -240,  -100,  -120,  -120],
        [  -60,   -90,  -130,  -140,  -190],
    ],
    // closing GC
    [
        [  -40,   -40,   -80,   -70,   -60],
        [  -40,  -100,  -110,  -230,   -90],
        [  -80,  -130,   -70,   -90,  -110],
        [  -70,  -250,  -110,  -130,  -120],
        [  -80,  -110,  -160,  -120,   -60],
    ],
    // closing GU
    [
        [   10,    20,    30,    40,     0],
        [   20,    20,    10,   -90,   -20],
        [   30,    10,   -10,   -20,   -20],
        [   40,  -100,   -20,   -30,     0],
        [    0,   -20,   -30,   -10,   -30],
    ],
    // closing UG
    [
        [   30,    30,    40,     0,    10],
        [   30,    30,   -20,   -70,     0],
        [   40,   -30,     0,     0,     0],
        [    0,   -80,   -10,   -10,    20],
        [   10,     0,   -20,    10,   -60],
    ],
    // closing AU
    [
        [   30,    30,   -10,     0,    10],
        [   30,   -20,   -20,   -80,     0],
        [  -10,   -30,    10,     0,     0],
        [    0,   -90,   -10,   -10,   -30],
        [   10,     0,   -20,   -40,   -70],
    ],
    // closing UA
    [
        [   20,    20,    30,   -10,     0],
        [   20,    20,   -30,   -90,   -10],
        [   30,    10,     0,   -10,   -10],
        [  -10,  -100,   -20,   -20,    10],
        [    0,   -10,  -120,     0,   -80],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Hairpin terminal mismatch enthalpies.
pub const MISMATCH_HAIRPIN_DH: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [ -220,  -200,  -190,  -140,   -90],
        [ -110,  -280,  -330,  -660,  -330],
        [ -220,  -420,  -180,  -330,  -340],
        [ -260,  -790,  -360,  -400,  -380],
        [ -210,  -290,  -440,  -450,  -590],
    ],
    // closing GC
    [
        [ -170,  -150,  -260,  -200,  -150],
        [ -150,  -320,  -330,  -700,  -330],
        [ -260,  -400,  -180,  -330,  -370],
        [ -200,  -760,  -390,  -440,  -380],
        [ -220,  -390,  -530,  -380,  -190],
    ],
    // closing GU
    [
        [  260,   310,   270,   320,   210],
        [  310,   230,   220,   -80,   170],
        [  270,   220,   180,   170,   190],
        [  320,  -110,   170,   150,   170],
        [  210,   170,   150,   140,    90],
    ],
    // closing UG
    [
        [  350,   270,   320,   210,   260],
        [  270,   290,   150,    10,   250],
        [  320,   110,   230,   250,   170],
        [  210,   -30,   220,   140,   250],
        [  260,   250,   110,   220,    20],
    ],
    // closing AU
    [
        [  270,   290,   180,   230,   280],
        [  290,   150,   170,   -10,   170],
        [  180,   130,   280,   170,   190],
        [  230,   -40,   140,   160,   110],
        [  280,   170,   130,    80,    10],
    ],
    // closing UA
    [
        [  250,   230,   290,   180,   230],
        [  270,   250,   110,   -60,   220],
        [  330,    80,   230,   220,   140],
        [  220,   -90,   190,   110,   220],
        [  170,   220,  -400,   190,   -50],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Interior loop terminal mismatch dG37, closing pair x 5' x 3' nucleotide.
pub const MISMATCH_INTERIOR_DG: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [  -10,   -50,   -40,   -30,   -20],
        [  -50,   -50,   -60,  -110,   -40],
        [  -40,   -60,   -30,   -40,   -90],
        [  -30,  -120,   -40,  -100,   -70],
        [  -20,   -40,  -100,   -80,  -100],
    ],
    // closing GC
    [
        [  -10,   -50,   -40,   -30,   -20],
        [  -50,   -60,   -60,  -120,   -40],
        [  -40,   -60,   -30,   -40,   -90],
        [  -50,  -150,   -60,   -70,   -40],
        [  -40,   -60,   -80,   -50,  -120],
    ],
    // closing GU
    [
        [  -20,   -10,     0,   -40,   -30],
        [  -10,     0,   -50,   -80,   -30],
        [    0,   -50,   -30,   -30,   -30],
        [  -40,   -80,   -30,   -30,   -10],
        [    0,   -50,   -60,   -40,   -40],
    ],
    // closing UG
    [
        [    0,     0,   -40,   -30,   -20],
        [    0,   -40,   -40,   -60,   -20],
        [  -40,   -40,   -20,   -20,   -10],
        [  -30,   -70,   -20,   -20,   -50],
        [  -40,   -40,   -40,   -20,   -30],
    ],
    // closing AU
    [
        [    0,   -40,   -30,   -20,   -10],
        [  -40,   -40,   -30,   -60,   -10],
        [  -30,   -40,   -10,   -10,   -60],
        [  -20,   -70,   -20,   -70,   -40],
        [  -10,   -10,   -70,   -50,   -60],
    ],
    // closing UA
    [
        [  -10,     0,   -40,   -30,   -20],
        [    0,   -50,   -40,   -70,   -20],
        [  -40,   -50,   -20,   -20,   -20],
        [  -30,   -80,   -30,   -30,   -50],
        [  -20,   -20,   -30,   -60,   -70],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Interior loop terminal mismatch enthalpies.
pub const MISMATCH_INTERIOR_DH: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [  -10,  -120,  -170,  -120,   -60],
        [ -120,  -200,  -210,  -350,  -110],
        [ -170,  -210,  -100,  -110,  -250],
        [ -120,  -380,  -110,  -280,  -260],
        [  -60,  -110,  -280,  -300,  -340],
    ],
    // closing GC
    [
        [  -10,  -120,  -170,   -60,  -100],
        [ -120,  -230,  -210,  -420,  -150],
        [ -170,  -210,  -100,  -150,  -290],
        [ -180,  -480,  -170,  -220,  -110],
        [ -130,  -170,  -220,  -140,  -340],
    ],
    // closing GU
    [
        [  -80,   -30,    20,   -90,   -80],
        [  -30,    20,  -120,  -300,   -60],
        [   20,  -120,  -140,  -120,  -140],
        [  -90,  -300,  -120,  -100,   -50],
        [  -40,  -180,  -190,  -110,  -130],
    ],
    // closing UG
    [
        [    0,    20,   -90,  -140,   -20],
        [   20,   -90,  -170,  -210,  -100],
        [  -90,  -170,   -80,   -60,   -50],
        [ -140,  -240,   -60,   -40,  -160],
        [ -150,  -130,  -110,   -20,   -80],
    ],
    // closing AU
    [
        [   20,   -90,  -140,   -80,   -30],
        [  -90,  -170,  -120,  -190,   -10],
        [ -140,  -150,   -30,   -10,  -150],
        [  -80,  -220,   -40,  -180,  -170],
        [  -30,   -10,  -180,  -200,  -210],
    ],
    // closing UA
    [
        [  -30,    20,   -90,  -140,   -80],
        [   20,  -120,  -170,  -240,   -60],
        [  -90,  -200,   -80,   -60,   -40],
        [ -140,  -280,  -100,   -80,  -120],
        [  -80,   -60,   -80,  -150,  -260],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Multiloop terminal mismatch dG37, closing pair x 5' x 3' nucleotide.
pub const MISMATCH_MULTI_DG: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [  -40,   -40,   -30,   -20,   -10],
        [  -40,   -40,   -30,   -80,   -60],
        [  -50,   -60,   -30,   -30,   -30],
        [  -40,  -110,   -40,   -40,   -60],
        [  -30,   -30,   -50,   -70,   -90],
    ],
    // closing GC
    [
        [  -10,   -10,   -50,   -40,   -30],
        [  -10,   -60,   -60,  -100,   -40],
        [  -50,   -60,   -30,   -40,   -40],
        [  -40,  -110,   -40,   -50,   -70],
        [  -30,   -40,   -50,   -80,  -100],
    ],
    // closing GU
    [
        [  -20,   -10,     0,    10,   -30],
        [  -10,   -10,     0,   -70,   -30],
        [    0,   -10,   -40,   -30,   -30],
        [   10,   -80,   -40,   -30,   -10],
        [  -30,   -30,   -40,   -20,   -20],
    ],
    // closing UG
    [
        [  -10,     0,    10,   -30,   -20],
        [    0,     0,   -40,   -60,   -20],
        [   10,   -40,   -30,   -20,   -20],
        [  -30,   -60,   -20,   -20,     0],
        [  -20,   -20,   -20,   -10,   -60],
    ],
    // closing AU
    [
        [    0,     0,   -40,   -30,   -20],
        [    0,   -40,   -40,   -60,   -20],
        [  -40,   -40,   -20,   -20,   -10],
        [  -30,   -60,   -20,   -20,   -50],
        [  -20,   -20,   -20,   -50,   -60],
    ],
    // closing UA
    [
        [   10,   -40,   -30,   -20,   -10],
        [  -40,   -30,   -30,   -50,   -10],
        [    0,   -50,   -30,   -30,   -20],
        [  -40,   -70,   -30,   -30,   -10],
        [  -30,   -30,   -30,   -10,   -70],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Multiloop terminal mismatch enthalpies.
pub const MISMATCH_MULTI_DH: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [ -130,  -110,   -60,  -100,   -50],
        [ -110,   -90,  -140,  -280,  -190],
        [ -120,  -230,  -120,  -100,   -80],
        [ -170,  -370,  -130,  -110,  -150],
        [ -120,  -100,  -140,  -180,  -330],
    ],
    // closing GC
    [
        [  -30,   -10,  -160,  -110,   -60],
        [  -10,  -150,  -170,  -280,  -170],
        [ -120,  -230,   -60,  -170,  -150],
        [ -170,  -370,  -170,  -180,  -220],
        [ -120,  -170,  -180,  -260,  -300],
    ],
    // closing GU
    [
        [ -100,   -50,     0,    10,  -100],
        [  -50,   -30,    20,  -220,   -80],
        [    0,   -10,   -90,   -80,   -60],
        [   50,  -220,  -170,   -60,   -70],
        [  -60,  -140,  -150,  -100,   -80],
    ],
    // closing UG
    [
        [  -50,     0,    50,  -100,   -40],
        [    0,    20,   -90,  -170,   -20],
        [   50,   -90,  -140,   -20,  -100],
        [  -60,  -230,   -80,  -100,   -20],
        [ -100,   -80,   -60,   -50,  -190],
    ],
    // closing AU
    [
        [    0,    20,   -90,  -140,   -20],
        [   20,   -90,  -170,  -210,  -100],
        [  -90,  -170,   -80,   -60,   -50],
        [ -140,  -210,   -60,   -40,  -160],
        [  -80,   -60,   -40,  -120,  -170],
    ],
    // closing UA
    [
        [   10,  -130,   -80,   -20,   -70],
        [ -130,   -80,   -60,  -200,   -50],
        [   20,  -120,  -140,  -120,   -60],
        [  -90,  -260,  -120,  -100,   -10],
        [ -140,  -120,  -100,   -10,  -180],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Exterior loop terminal mismatch dG37, closing pair x 5' x 3' nucleotide.
pub const MISMATCH_EXTERIOR_DG: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [  -10,   -10,   -50,   -40,   -30],
        [  -10,   -60,   -60,  -110,   -40],
        [  -50,   -70,   -40,   -40,   -40],
        [  -40,  -120,   -50,   -50,   -70],
        [  -30,   -40,   -60,   -80,  -100],
    ],
    // closing GC
    [
        [  -40,   -30,   -20,   -10,   -50],
        [  -30,   -30,   -30,  -140,   -60],
        [  -20,   -40,   -60,   -60,   -60],
        [  -10,  -150,   -70,   -70,   -40],
        [  -50,   -60,   -80,   -50,   -20],
    ],
    // closing GU
    [
        [  -20,   -20,   -10,     0,   -40],
        [  -40,   -30,   -30,   -50,   -10],
        [  -30,   -30,   -10,   -10,   -50],
        [  -20,   -60,   -10,   -60,   -40],
        [  -10,   -10,   -60,   -40,   -50],
    ],
    // closing UG
    [
        [  -10,   -10,     0,   -40,   -30],
        [  -30,   -20,   -10,   -40,   -40],
        [  -20,   -20,     0,   -40,   -40],
        [  -10,   -40,   -50,   -50,   -20],
        [    0,   -40,   -50,   -30,   -30],
    ],
    // closing AU
    [
        [  -10,     0,   -40,   -30,   -20],
        [    0,   -40,   -40,   -70,   -20],
        [  -40,   -40,   -40,   -40,   -40],
        [    0,   -90,   -40,   -40,   -20],
        [  -40,   -40,   -40,   -30,   -30],
    ],
    // closing UA
    [
        [  -20,   -10,     0,   -40,   -30],
        [  -10,     0,   -50,   -80,   -30],
        [    0,   -50,   -30,   -30,   -30],
        [  -40,   -80,   -30,   -30,   -10],
        [    0,   -50,   -50,   -40,   -40],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// Exterior loop terminal mismatch enthalpies.
pub const MISMATCH_EXTERIOR_DH: [[[i32; 5]; 5]; 8] = [
    // closing NP
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
    // closing CG
    [
        [  -30,   -10,  -120,  -170,  -120],
        [  -10,  -150,  -230,  -370,  -130],
        [ -120,  -260,  -150,  -130,  -110],
        [ -170,  -400,  -160,  -140,  -180],
        [ -120,  -130,  -170,  -220,  -360],
    ],
    // closing GC
    [
        [ -170,  -120,   -60,   -10,  -120],
        [ -120,  -100,   -80,  -410,  -230],
        [  -60,  -110,  -150,  -230,  -210],
        [  -10,  -440,  -260,  -240,  -130],
        [ -120,  -230,  -280,  -160,   -60],
    ],
    // closing GU
    [
        [ -100,   -80,   -70,   -20,  -130],
        [ -150,  -100,  -120,  -160,   -10],
        [ -100,   -80,   -30,   -10,  -120],
        [  -40,  -150,   -10,  -150,  -170],
        [   10,   -70,  -150,  -170,  -180],
    ],
    // closing UG
    [
        [  -50,   -30,   -20,  -130,   -80],
        [ -100,   -40,   -30,  -110,   -90],
        [  -40,   -20,    20,   -90,  -170],
        [   10,  -170,  -120,  -200,   -80],
        [  -40,  -150,  -200,  -120,  -100],
    ],
    // closing AU
    [
        [  -30,    20,   -90,   -80,   -20],
        [   20,   -90,  -170,  -180,  -100],
        [  -90,  -170,  -150,  -170,  -150],
        [  -40,  -310,  -130,  -150,   -60],
        [ -150,  -130,  -110,  -100,   -80],
    ],
    // closing UA
    [
        [  -80,   -30,    20,   -90,   -80],
        [  -30,    20,  -120,  -300,   -60],
        [   20,  -120,  -140,  -120,  -140],
        [  -90,  -300,  -120,  -100,   -50],
        [  -40,  -180,  -160,  -110,  -130],
    ],
    // closing NS
    [
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
        [    0,     0,     0,     0,     0],
    ],
];

/// 1x1 interior loop free energies dG37, outer pair x inner pair x
/// 5' x 3' mismatch. Canonical closings only; unmeasured entries carry
/// the loop initiation plus closure penalties, measured loops their
/// literature values.
pub const INT11_DG: [[[[i32; 5]; 5]; 6]; 6] = [
    // outer CG
    [
        // inner CG
        [
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,  -140,   100],
            [  100,   100,   100,   100,   -40],
        ],
        // inner GC
        [
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,  -140,   100],
            [  100,   100,   100,   100,   100],
        ],
        // inner GU
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner UG
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner AU
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner UA
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
    ],
    // outer GC
    [
        // inner CG
        [
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,  -140,   100],
            [  100,   100,   100,   100,   100],
        ],
        // inner GC
        [
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,   100,   100],
            [  100,   100,   100,  -140,   100],
            [  100,   100,   100,   100,   -40],
        ],
        // inner GU
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner UG
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner AU
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner UA
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
    ],
    // outer GU
    [
        // inner CG
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GC
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UG
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner AU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UA
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
    ],
    // outer UG
    [
        // inner CG
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GC
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UG
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner AU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UA
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
    ],
    // outer AU
    [
        // inner CG
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GC
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UG
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner AU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UA
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   -60,   200],
            [  200,   200,   200,   200,   200],
        ],
    ],
    // outer UA
    [
        // inner CG
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GC
        [
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,   150,   150],
            [  150,   150,   150,    40,   150],
            [  150,   150,   150,   150,   150],
        ],
        // inner GU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UG
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner AU
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   -60,   200],
            [  200,   200,   200,   200,   200],
        ],
        // inner UA
        [
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,   200,   200],
            [  200,   200,   200,    90,   200],
            [  200,   200,   200,   200,   200],
        ],
    ],
];

/// 1x1 interior loop enthalpies.
pub const INT11_DH: [[[[i32; 5]; 5]; 6]; 6] = [
    // outer CG
    [
        // inner CG
        [
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720, -1000,  -720],
            [ -720,  -720,  -720,  -720,  -720],
        ],
        // inner GC
        [
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -900,  -720],
            [ -720,  -720,  -720,  -720,  -720],
        ],
        // inner GU
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner UG
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner AU
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner UA
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
    ],
    // outer GC
    [
        // inner CG
        [
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -900,  -720],
            [ -720,  -720,  -720,  -720,  -720],
        ],
        // inner GC
        [
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720,  -720,  -720],
            [ -720,  -720,  -720, -1000,  -720],
            [ -720,  -720,  -720,  -720,  -720],
        ],
        // inner GU
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner UG
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner AU
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner UA
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
    ],
    // outer GU
    [
        // inner CG
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GC
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UG
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner AU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UA
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
    ],
    // outer UG
    [
        // inner CG
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GC
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UG
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner AU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UA
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
    ],
    // outer AU
    [
        // inner CG
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GC
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UG
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner AU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UA
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -620,    20],
            [   20,    20,    20,    20,    20],
        ],
    ],
    // outer UA
    [
        // inner CG
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GC
        [
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -350,  -350],
            [ -350,  -350,  -350,  -650,  -350],
            [ -350,  -350,  -350,  -350,  -350],
        ],
        // inner GU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UG
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner AU
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -620,    20],
            [   20,    20,    20,    20,    20],
        ],
        // inner UA
        [
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,    20,    20],
            [   20,    20,    20,  -280,    20],
            [   20,    20,    20,    20,    20],
        ],
    ],
];

/// Specially stable (or penalized) hairpin loops: exact-match bonuses
/// added on top of the regular hairpin energy. Keys include the closing
/// pair on both ends; tri-, tetra- and hexaloops are 5, 6 and 8 bases.
pub const SPECIAL_HAIRPINS: &[(&str, i32, i32)] = &[
    // triloops
    ("CAACG", -90, -640),
    ("GUUAC", -90, -620),
    // GNRA, UNCG and CUUG tetraloop families
    ("CGAAAG", -230, -1340),
    ("CGCAAG", -230, -1290),
    ("CGAGAG", -200, -1190),
    ("CGUGAG", -200, -1160),
    ("CGGAAG", -230, -1340),
    ("CGUAAG", -200, -1120),
    ("CUUCGG", -300, -1660),
    ("CCUUGG", -250, -1450),
    ("GGAAAC", -200, -1190),
    ("GGCAAC", -180, -1060),
    ("GGAGAC", -180, -1040),
    ("GGGAAC", -180, -1060),
    ("GUUCGC", -250, -1430),
    ("GCUUGC", -200, -1170),
    ("UGAAAA", -150, -900),
    ("UUUCGA", -180, -1050),
    ("AGAAAU", -150, -880),
    ("AUUCGU", -180, -1020),
    ("GGGGAC", -300, -1650),
    ("AGCGAU", -170, -980),
    // hexaloops
    ("ACAGUGCU", -160, -950),
    ("ACAGUACU", -130, -780),
    ("ACAGUGAU", -120, -700),
    ("ACAGUGUU", -60, -370),
];
