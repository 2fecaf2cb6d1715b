//! aptX Tables and Constants
//!
//! Quantizer tables for the four subbands of both profiles, the step-size
//! mantissa table and the QMF prototype filters. Tables are immutable and
//! selected through [`SubbandTables`], one entry per [`Subband`].
//!
//! The high resolution (HD) tables refine each standard quantizer by a
//! factor of four: every standard interval is split in four and the
//! step-size offsets are interpolated along the same grid.

use crate::types::CodecType;

/// Number of subbands produced by the QMF tree
pub const NB_SUBBANDS: usize = 4;

/// Number of channels handled by one context
pub const NB_CHANNELS: usize = 2;

/// Samples per channel consumed by one encode step
pub const SAMPLES_PER_GROUP: usize = 4;

/// Taps of every QMF filter
pub const FILTER_TAPS: usize = 16;

/// Largest predictor order across all subbands
pub const MAX_PREDICTION_ORDER: usize = 24;

/// Length of the parity cycle, in codewords
pub const SYNC_PERIOD: u8 = 8;

/// Decoder output lags encoder input by this many samples per channel
pub const CODEC_LATENCY: usize = 90;

/// Frequency band of a subband sample, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subband {
    /// Low frequency band
    Lf = 0,
    /// Mid-low frequency band
    Mlf = 1,
    /// Mid-high frequency band
    Mhf = 2,
    /// High frequency band
    Hf = 3,
}

impl Subband {
    /// All subbands in processing order
    pub const ALL: [Subband; NB_SUBBANDS] = [Subband::Lf, Subband::Mlf, Subband::Mhf, Subband::Hf];

    /// Position of the subband in per-channel arrays
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Constant tables driving one subband quantizer
#[derive(Debug)]
pub struct SubbandTables {
    /// Reconstruction levels, first entry is the negated second
    pub quantize_intervals: &'static [i32],
    /// Dither gain applied by the inverse quantizer
    pub invert_quantize_dither_factors: &'static [i32],
    /// Midpoint dither gain applied by the forward quantizer
    pub quantize_dither_factors: &'static [i32],
    /// Step-size selector increments, keyed by quantized magnitude
    pub quantize_factor_select_offset: &'static [i16],
    /// Upper bound of the step-size selector
    pub factor_max: i32,
    /// Number of adaptive predictor taps
    pub prediction_order: usize,
}

impl SubbandTables {
    /// Number of quantization levels (intervals table length)
    pub fn tables_size(&self) -> usize {
        self.quantize_intervals.len()
    }
}

/// Tables of the standard profile, indexed by [`Subband::index`]
pub static STANDARD_TABLES: [SubbandTables; NB_SUBBANDS] = [
    SubbandTables {
        quantize_intervals: &QUANTIZE_INTERVALS_LF,
        invert_quantize_dither_factors: &INVERT_QUANTIZE_DITHER_FACTORS_LF,
        quantize_dither_factors: &QUANTIZE_DITHER_FACTORS_LF,
        quantize_factor_select_offset: &QUANTIZE_FACTOR_SELECT_OFFSET_LF,
        factor_max: 0x11FF,
        prediction_order: 24,
    },
    SubbandTables {
        quantize_intervals: &QUANTIZE_INTERVALS_MLF,
        invert_quantize_dither_factors: &INVERT_QUANTIZE_DITHER_FACTORS_MLF,
        quantize_dither_factors: &QUANTIZE_DITHER_FACTORS_MLF,
        quantize_factor_select_offset: &QUANTIZE_FACTOR_SELECT_OFFSET_MLF,
        factor_max: 0x14FF,
        prediction_order: 12,
    },
    SubbandTables {
        quantize_intervals: &QUANTIZE_INTERVALS_MHF,
        invert_quantize_dither_factors: &INVERT_QUANTIZE_DITHER_FACTORS_MHF,
        quantize_dither_factors: &QUANTIZE_DITHER_FACTORS_MHF,
        quantize_factor_select_offset: &QUANTIZE_FACTOR_SELECT_OFFSET_MHF,
        factor_max: 0x16FF,
        prediction_order: 6,
    },
    SubbandTables {
        quantize_intervals: &QUANTIZE_INTERVALS_HF,
        invert_quantize_dither_factors: &INVERT_QUANTIZE_DITHER_FACTORS_HF,
        quantize_dither_factors: &QUANTIZE_DITHER_FACTORS_HF,
        quantize_factor_select_offset: &QUANTIZE_FACTOR_SELECT_OFFSET_HF,
        factor_max: 0x15FF,
        prediction_order: 12,
    },
];

/// Tables of the high resolution profile, indexed by [`Subband::index`]
pub static HD_TABLES: [SubbandTables; NB_SUBBANDS] = [
    SubbandTables {
        quantize_intervals: &HD_QUANTIZE_INTERVALS_LF,
        invert_quantize_dither_factors: &HD_INVERT_QUANTIZE_DITHER_FACTORS_LF,
        quantize_dither_factors: &HD_QUANTIZE_DITHER_FACTORS_LF,
        quantize_factor_select_offset: &HD_QUANTIZE_FACTOR_SELECT_OFFSET_LF,
        factor_max: 0x11FF,
        prediction_order: 24,
    },
    SubbandTables {
        quantize_intervals: &HD_QUANTIZE_INTERVALS_MLF,
        invert_quantize_dither_factors: &HD_INVERT_QUANTIZE_DITHER_FACTORS_MLF,
        quantize_dither_factors: &HD_QUANTIZE_DITHER_FACTORS_MLF,
        quantize_factor_select_offset: &HD_QUANTIZE_FACTOR_SELECT_OFFSET_MLF,
        factor_max: 0x14FF,
        prediction_order: 12,
    },
    SubbandTables {
        quantize_intervals: &HD_QUANTIZE_INTERVALS_MHF,
        invert_quantize_dither_factors: &HD_INVERT_QUANTIZE_DITHER_FACTORS_MHF,
        quantize_dither_factors: &HD_QUANTIZE_DITHER_FACTORS_MHF,
        quantize_factor_select_offset: &HD_QUANTIZE_FACTOR_SELECT_OFFSET_MHF,
        factor_max: 0x16FF,
        prediction_order: 6,
    },
    SubbandTables {
        quantize_intervals: &HD_QUANTIZE_INTERVALS_HF,
        invert_quantize_dither_factors: &HD_INVERT_QUANTIZE_DITHER_FACTORS_HF,
        quantize_dither_factors: &HD_QUANTIZE_DITHER_FACTORS_HF,
        quantize_factor_select_offset: &HD_QUANTIZE_FACTOR_SELECT_OFFSET_HF,
        factor_max: 0x15FF,
        prediction_order: 12,
    },
];

/// Select the table set of a profile
pub fn tables_for(codec_type: CodecType) -> &'static [SubbandTables; NB_SUBBANDS] {
    match codec_type {
        CodecType::Aptx => &STANDARD_TABLES,
        CodecType::AptxHd => &HD_TABLES,
    }
}

/// Step-size mantissas, indexed by the top five fractional selector bits
pub const QUANTIZATION_FACTORS: [i16; 32] = [
    2048, 2093, 2139, 2186, 2233, 2282, 2332, 2383,
    2435, 2489, 2543, 2599, 2656, 2714, 2774, 2834,
    2896, 2960, 3025, 3091, 3158, 3228, 3298, 3371,
    3444, 3520, 3597, 3676, 3756, 3838, 3922, 4008,
];

/// Outer QMF stage prototype filter, polyphase pair (second is mirrored)
pub const QMF_OUTER_COEFFS: [[i32; FILTER_TAPS]; 2] = [
    [
        730, -413, -9611, 43626, -121026, 269973, -585547, 2801966,
        697128, -160481, 27611, 8478, -10043, 3511, 688, -897,
    ],
    [
        -897, 688, 3511, -10043, 8478, 27611, -160481, 697128,
        2801966, -585547, 269973, -121026, 43626, -9611, -413, 730,
    ],
];

/// Inner QMF stage prototype filter, polyphase pair (second is mirrored)
pub const QMF_INNER_COEFFS: [[i32; FILTER_TAPS]; 2] = [
    [
        1033, -584, -13592, 61697, -171156, 381799, -828088, 3962579,
        985888, -226954, 39048, 11990, -14203, 4966, 973, -1268,
    ],
    [
        -1268, 973, 4966, -14203, 11990, 39048, -226954, 985888,
        3962579, -828088, 381799, -171156, 61697, -13592, -584, 1033,
    ],
];

// ================ QUANTIZER TABLES ================

/// Reconstruction levels of the standard low-frequency subband quantizer
pub const QUANTIZE_INTERVALS_LF: [i32; 65] = [
        -9948,      9948,     29860,     49808,     69822,     89926,    110144,    130502,
       151026,    171738,    192666,    213832,    235264,    256982,    279014,    301384,
       324118,    347244,    370790,    394782,    419250,    444226,    469742,    495834,
       522540,    549898,    577952,    606748,    636338,    666778,    698130,    730462,
       763852,    798386,    834162,    871290,    909892,    950108,    992098,   1036044,
      1082158,   1130680,   1181894,   1236122,   1293742,   1355196,   1421018,   1491846,
      1568454,   1651786,   1742994,   1843510,   1955098,   2080014,   2221116,   2382056,
      2567598,   2784056,   3040174,   3347624,   3722846,   4189846,   4786798,   5576494,
      8388607,
];

/// Dither gain applied when reconstructing the standard low-frequency subband
pub const INVERT_QUANTIZE_DITHER_FACTORS_LF: [i32; 65] = [
         9948,      9948,      9962,      9988,     10026,     10052,     10109,     10179,
        10262,     10356,     10464,     10583,     10716,     10859,     11016,     11185,
        11367,     11563,     11773,     11996,     12234,     12488,     12758,     13046,
        13353,     13679,     14027,     14398,     14795,     15220,     15676,     16166,
        16695,     17267,     17888,     18564,     19301,     20108,     20995,     21973,
        23057,     24261,     25607,     27114,     28810,     30727,     32911,     35414,
        38304,     41666,     45604,     50258,     55794,     62458,     70551,     80470,
        92771,    108229,    128059,    153725,    187611,    233500,    298476,    394848,
      1406056,
];

/// Midpoint dither gain of the standard low-frequency subband quantizer
pub const QUANTIZE_DITHER_FACTORS_LF: [i32; 65] = [
            0,         4,         7,        10,        13,        14,        17,        20,
           23,        27,        29,        33,        35,        39,        42,        45,
           49,        52,        55,        59,        63,        67,        72,        76,
           81,        87,        92,        99,       106,       114,       122,       132,
          143,       155,       169,       184,       201,       221,       244,       271,
          301,       336,       376,       424,       479,       546,       625,       722,
          840,       984,      1163,      1384,      1666,      2023,      2479,      3075,
         3864,      4957,      6416,      8471,     11472,     16244,     24093,    252802,
            0,
];

/// Step-size selector increments of the standard low-frequency subband
pub const QUANTIZE_FACTOR_SELECT_OFFSET_LF: [i16; 65] = [
     -21,  -19,  -17,  -15,  -12,  -10,   -8,   -6,   -4,   -1,    1,    3,    6,    8,   10,   13,
      15,   18,   20,   23,   26,   29,   31,   34,   37,   40,   43,   47,   50,   53,   57,   60,
      64,   68,   72,   76,   80,   85,   89,   94,   99,  105,  110,  116,  123,  129,  136,  144,
     152,  161,  171,  182,  194,  207,  222,  241,  263,  291,  328,  382,  467,  522,  522,  522,
     522,
];

/// Reconstruction levels of the standard mid-low-frequency subband quantizer
pub const QUANTIZE_INTERVALS_MLF: [i32; 9] = [
       -89806,     89806,    278502,    494338,    759442,   1113112,   1652322,   2720256,
      5190186,
];

/// Dither gain applied when reconstructing the standard mid-low-frequency subband
pub const INVERT_QUANTIZE_DITHER_FACTORS_MLF: [i32; 9] = [
        89806,     89806,     94348,    107918,    132552,    176835,    269605,    533967,
      1234965,
];

/// Midpoint dither gain of the standard mid-low-frequency subband quantizer
pub const QUANTIZE_DITHER_FACTORS_MLF: [i32; 9] = [
            0,      1135,      3392,      6158,     11070,     23192,     66090,    175249,
            0,
];

/// Step-size selector increments of the standard mid-low-frequency subband
pub const QUANTIZE_FACTOR_SELECT_OFFSET_MLF: [i16; 9] = [
     -21,  -16,  -12,   -7,   -2,    3,    8,   13,   18,
];

/// Reconstruction levels of the standard mid-high-frequency subband quantizer
pub const QUANTIZE_INTERVALS_MHF: [i32; 3] = [
     -1580152,   1580152,   5237760,
];

/// Dither gain applied when reconstructing the standard mid-high-frequency subband
pub const INVERT_QUANTIZE_DITHER_FACTORS_MHF: [i32; 3] = [
      1580152,   1580152,   1828804,
];

/// Midpoint dither gain of the standard mid-high-frequency subband quantizer
pub const QUANTIZE_DITHER_FACTORS_MHF: [i32; 3] = [
            0,     62163,         0,
];

/// Step-size selector increments of the standard mid-high-frequency subband
pub const QUANTIZE_FACTOR_SELECT_OFFSET_MHF: [i16; 3] = [
      -4,   -4,   20,
];

/// Reconstruction levels of the standard high-frequency subband quantizer
pub const QUANTIZE_INTERVALS_HF: [i32; 5] = [
      -450244,    450244,   1393716,   2700012,   4947364,
];

/// Dither gain applied when reconstructing the standard high-frequency subband
pub const INVERT_QUANTIZE_DITHER_FACTORS_HF: [i32; 5] = [
       450244,    450244,    471736,    653148,   1123676,
];

/// Midpoint dither gain of the standard high-frequency subband quantizer
pub const QUANTIZE_DITHER_FACTORS_HF: [i32; 5] = [
            0,      5373,     45353,    117632,         0,
];

/// Step-size selector increments of the standard high-frequency subband
pub const QUANTIZE_FACTOR_SELECT_OFFSET_HF: [i16; 5] = [
      -6,   -6,   -1,    8,   22,
];

/// Reconstruction levels of the HD low-frequency subband quantizer
pub const HD_QUANTIZE_INTERVALS_LF: [i32; 257] = [
        -2487,      2487,      7461,     12437,     17415,     22393,     27371,     32354,
        37340,     42328,     47314,     52310,     57313,     62317,     67320,     72335,
        77361,     82387,     87413,     92453,     97508,    102562,    107617,    112689,
       117778,    122868,    127957,    133068,    138198,    143330,    148460,    153615,
       158793,    163971,    169149,    174354,    179586,    184818,    190050,    195312,
       200603,    205895,    211186,    216511,    221869,    227227,    232585,    237979,
       243408,    248838,    254267,    259736,    265244,    270752,    276260,    281810,
       287403,    292995,    298588,    304226,    309909,    315593,    321276,    327009,
       332790,    338572,    344353,    350187,    356074,    361960,    367847,    373789,
       379787,    385785,    391783,    397840,    403958,    410074,    416192,    422372,
       428616,    434860,    441104,    447416,    453794,    460174,    466552,    473004,
       479526,    486050,    492572,    499172,    505849,    512525,    519202,    525960,
       532799,    539639,    546478,    553405,    560418,    567432,    574445,    581552,
       588750,    595950,    603148,    610447,    617844,    625242,    632639,    640143,
       647753,    655363,    662973,    670697,    678535,    686373,    694211,    702172,
       710254,    718338,    726420,    734636,    742983,    751331,    759678,    768169,
       776802,    785436,    794069,    802858,    811802,    820746,    829690,    838803,
       848085,    857367,    866649,    876115,    885766,    895416,    905067,    914919,
       924973,    935027,    945081,    955357,    965854,    976352,    986849,    997591,
      1008578,   1019564,   1030551,   1041808,   1053337,   1064865,   1076394,   1088223,
      1100354,   1112484,   1124615,   1137082,   1149885,   1162689,   1175492,   1188672,
      1202230,   1215786,   1229344,   1243324,   1257730,   1272134,   1286540,   1301424,
      1316787,   1332151,   1347514,   1363424,   1379879,   1396335,   1412790,   1429872,
      1447578,   1465286,   1482992,   1501422,   1520574,   1539726,   1558878,   1578870,
      1599704,   1620536,   1641370,   1663187,   1685989,   1708791,   1731593,   1755558,
      1780688,   1805816,   1830946,   1857458,   1885356,   1913252,   1941150,   1970712,
      2001942,   2033170,   2064400,   2097652,   2132927,   2168203,   2203478,   2241234,
      2281468,   2321704,   2361938,   2405249,   2451634,   2498020,   2544405,   2594655,
      2648770,   2702884,   2756999,   2816071,   2880100,   2944130,   3008159,   3078605,
      3155468,   3232330,   3309193,   3394527,   3488332,   3582138,   3675943,   3781221,
      3897971,   4014721,   4131471,   4264465,   4413703,   4562941,   4712179,   4885510,
      5082934,   5280358,   5477782,   5928008,   6631036,   7334065,   8037093,   8740121,
      9443149,
];

/// Dither gain applied when reconstructing the HD low-frequency subband
pub const HD_INVERT_QUANTIZE_DITHER_FACTORS_LF: [i32; 257] = [
         2487,      2487,      2487,      2488,      2489,      2489,      2489,      2491,
         2493,      2494,      2493,      2498,      2501,      2502,      2501,      2507,
         2513,      2513,      2513,      2520,      2527,      2527,      2527,      2536,
         2544,      2545,      2544,      2555,      2565,      2566,      2565,      2577,
         2589,      2589,      2589,      2602,      2616,      2616,      2616,      2631,
         2645,      2646,      2645,      2662,      2679,      2679,      2679,      2697,
         2714,      2715,      2714,      2734,      2754,      2754,      2754,      2775,
         2796,      2796,      2796,      2819,      2841,      2842,      2841,      2866,
         2890,      2891,      2890,      2917,      2943,      2943,      2943,      2971,
         2999,      2999,      2999,      3028,      3059,      3058,      3059,      3090,
         3122,      3122,      3122,      3156,      3189,      3190,      3189,      3226,
         3261,      3262,      3261,      3300,      3338,      3338,      3338,      3379,
         3419,      3420,      3419,      3463,      3506,      3507,      3506,      3553,
         3599,      3600,      3599,      3649,      3698,      3699,      3698,      3752,
         3805,      3805,      3805,      3862,      3919,      3919,      3919,      3980,
         4041,      4042,      4041,      4108,      4173,      4174,      4173,      4245,
         4316,      4317,      4316,      4394,      4472,      4472,      4472,      4556,
         4641,      4641,      4641,      4733,      4825,      4825,      4825,      4926,
         5027,      5027,      5027,      5138,      5248,      5249,      5248,      5371,
         5493,      5493,      5493,      5628,      5764,      5764,      5764,      5914,
         6065,      6065,      6065,      6233,      6401,      6402,      6401,      6590,
         6779,      6778,      6779,      6990,      7203,      7202,      7203,      7442,
         7681,      7682,      7681,      7955,      8227,      8228,      8227,      8541,
         8853,      8854,      8853,      9215,      9576,      9576,      9576,      9996,
        10417,     10416,     10417,     10908,     11401,     11401,     11401,     11982,
        12565,     12564,     12565,     13256,     13949,     13948,     13949,     14781,
        15615,     15614,     15615,     16626,     17637,     17638,     17637,     18878,
        20117,     20118,     20117,     21655,     23192,     23193,     23192,     25125,
        27057,     27057,     27057,     29536,     32014,     32015,     32014,     35223,
        38431,     38431,     38431,     42667,     46902,     46903,     46902,     52639,
        58375,     58375,     58375,     66497,     74619,     74619,     74619,     86665,
        98712,     98712,     98712,    225113,    351514,    351514,    351514,    351514,
       351514,
];

/// Midpoint dither gain of the HD low-frequency subband quantizer
pub const HD_QUANTIZE_DITHER_FACTORS_LF: [i32; 257] = [
            0,         0,         0,         0,         0,         0,         0,         0,
            0,         0,         1,         0,         0,         0,         1,         1,
            0,         0,         1,         1,         0,         0,         2,         2,
            0,         0,         2,         2,         0,         0,         3,         2,
            0,         0,         3,         3,         0,         0,         3,         3,
            0,         0,         4,         4,         0,         0,         4,         4,
            0,         0,         5,         4,         0,         0,         5,         5,
            0,         0,         5,         5,         0,         0,         6,         6,
            0,         0,         6,         6,         0,         0,         6,         7,
            0,         0,         7,         7,         0,         0,         7,         8,
            0,         0,         8,         8,         0,         0,         9,         8,
            0,         0,         9,         9,         0,         0,        10,        10,
            0,         0,        11,        10,         0,         0,        11,        11,
            0,         0,        12,        12,         0,         0,        13,        13,
            0,         0,        14,        14,         0,         0,        15,        15,
            0,         0,        16,        16,         0,         0,        18,        17,
            0,         0,        19,        19,         0,         0,        21,        21,
            0,         0,        23,        23,         0,         0,        25,        25,
            0,         0,        27,        27,         0,         0,        30,        30,
            0,         0,        33,        34,         0,         0,        37,        37,
            0,         0,        42,        42,         0,         0,        47,        47,
            0,         0,        52,        53,         0,         0,        59,        59,
            0,         0,        68,        68,         0,         0,        78,        78,
            0,         0,        90,        90,         0,         0,       105,       105,
            0,         0,       122,       123,         0,         0,       145,       145,
            0,         0,       172,       173,         0,         0,       208,       208,
            0,         0,       252,       252,         0,         0,       310,       309,
            0,         0,       384,       384,         0,         0,       483,       483,
            0,         0,       619,       619,         0,         0,       802,       802,
            0,         0,      1058,      1058,         0,         0,      1434,      1434,
            0,         0,      2030,      2030,         0,         0,      3011,      3011,
            0,         0,     31600,     31600,         0,         0,         0,         0,
            0,
];

/// Step-size selector increments of the HD low-frequency subband
pub const HD_QUANTIZE_FACTOR_SELECT_OFFSET_LF: [i16; 257] = [
     -19,  -19,  -19,  -19,  -18,  -18,  -17,  -17,  -16,  -16,  -15,  -15,  -14,  -13,  -12,  -12,
     -11,  -11,  -10,  -10,   -9,   -9,   -8,   -8,   -7,   -7,   -6,   -6,   -5,   -5,   -4,   -4,
      -3,   -2,   -1,   -1,    0,    0,    1,    1,    2,    2,    3,    3,    4,    5,    6,    6,
       7,    7,    8,    8,    9,    9,   10,   10,   11,   12,   13,   13,   14,   14,   15,   15,
      16,   17,   18,   18,   19,   19,   20,   20,   21,   22,   23,   23,   24,   25,   26,   26,
      27,   28,   29,   29,   30,   30,   31,   31,   32,   33,   34,   34,   35,   36,   37,   37,
      38,   39,   40,   40,   41,   42,   43,   44,   44,   46,   46,   47,   48,   49,   50,   50,
      51,   52,   53,   54,   54,   56,   56,   57,   58,   59,   60,   60,   62,   62,   64,   64,
      66,   66,   68,   68,   70,   70,   72,   72,   74,   74,   76,   76,   78,   78,   80,   81,
      82,   83,   84,   86,   86,   88,   88,   90,   91,   92,   93,   95,   96,   97,   98,  100,
     101,  103,  104,  106,  107,  108,  109,  111,  112,  114,  115,  117,  119,  120,  122,  124,
     125,  127,  128,  130,  132,  133,  135,  137,  139,  141,  143,  145,  147,  149,  151,  153,
     155,  158,  160,  162,  165,  167,  170,  172,  175,  178,  181,  184,  186,  190,  192,  196,
     199,  202,  205,  209,  213,  216,  220,  224,  229,  234,  239,  244,  249,  255,  260,  266,
     274,  280,  288,  296,  305,  314,  323,  335,  348,  362,  375,  393,  414,  435,  456,  474,
     488,  501,  515,  522,  522,  522,  522,  522,  522,  522,  522,  522,  522,  522,  522,  522,
     522,
];

/// Reconstruction levels of the HD mid-low-frequency subband quantizer
pub const HD_QUANTIZE_INTERVALS_MLF: [i32; 33] = [
       -22452,     22452,     67354,    113393,    160567,    207741,    254915,    305482,
       359440,    413400,    467358,    527476,    593752,    660028,    726304,    803651,
       892068,    980486,   1068903,   1180513,   1315316,   1450118,   1584921,   1785814,
      2052797,   2319781,   2586764,   3028997,   3646480,   4263962,   4881445,   5498927,
      6116410,
];

/// Dither gain applied when reconstructing the HD mid-low-frequency subband
pub const HD_INVERT_QUANTIZE_DITHER_FACTORS_MLF: [i32; 33] = [
        22452,     22452,     22451,     23019,     23587,     23587,     23587,     25283,
        26979,     26980,     26979,     30059,     33138,     33138,     33138,     38673,
        44208,     44209,     44208,     55805,     67401,     67401,     67401,    100446,
       133491,    133492,    133491,    221116,    308741,    308741,    308741,    308741,
       308741,
];

/// Midpoint dither gain of the HD mid-low-frequency subband quantizer
pub const HD_QUANTIZE_DITHER_FACTORS_MLF: [i32; 33] = [
            0,         0,       142,       141,         0,         0,       424,       423,
            0,         0,       770,       769,         0,         0,      1383,      1383,
            0,         0,      2899,      2899,         0,         0,      8261,      8261,
            0,         0,     21906,     21906,         0,         0,         0,         0,
            0,
];

/// Step-size selector increments of the HD mid-low-frequency subband
pub const HD_QUANTIZE_FACTOR_SELECT_OFFSET_MLF: [i16; 33] = [
     -16,  -16,  -16,  -16,  -14,  -14,  -12,  -11,  -10,   -9,   -8,   -6,   -5,   -4,   -3,   -1,
       0,    1,    2,    4,    5,    6,    7,    9,   10,   11,   12,   14,   15,   16,   17,   18,
      18,
];

/// Reconstruction levels of the HD mid-high-frequency subband quantizer
pub const HD_QUANTIZE_INTERVALS_MHF: [i32; 9] = [
      -395038,    395038,   1185114,   2037353,   2951755,   3866157,   4780559,   5694961,
      6609363,
];

/// Dither gain applied when reconstructing the HD mid-high-frequency subband
pub const HD_INVERT_QUANTIZE_DITHER_FACTORS_MHF: [i32; 9] = [
       395038,    395038,    395038,    426119,    457201,    457201,    457201,    457201,
       457201,
];

/// Midpoint dither gain of the HD mid-high-frequency subband quantizer
pub const HD_QUANTIZE_DITHER_FACTORS_MHF: [i32; 9] = [
            0,         0,      7770,      7770,         0,         0,         0,         0,
            0,
];

/// Step-size selector increments of the HD mid-high-frequency subband
pub const HD_QUANTIZE_FACTOR_SELECT_OFFSET_MHF: [i16; 9] = [
      -4,   -4,   -4,   -1,    5,   11,   17,   20,   20,
];

/// Reconstruction levels of the HD high-frequency subband quantizer
pub const HD_QUANTIZE_INTERVALS_HF: [i32; 17] = [
      -112561,    112561,    337683,    568178,    804046,   1039914,   1275782,   1557003,
      1883577,   2210151,   2536725,   2980931,   3542769,   4104607,   4666445,   5228283,
      5790121,
];

/// Dither gain applied when reconstructing the HD high-frequency subband
pub const HD_INVERT_QUANTIZE_DITHER_FACTORS_HF: [i32; 17] = [
       112561,    112561,    112561,    115247,    117934,    117934,    117934,    140610,
       163287,    163287,    163287,    222103,    280919,    280919,    280919,    280919,
       280919,
];

/// Midpoint dither gain of the HD high-frequency subband quantizer
pub const HD_QUANTIZE_DITHER_FACTORS_HF: [i32; 17] = [
            0,         0,       671,       671,         0,         0,      5669,      5669,
            0,         0,     14704,     14704,         0,         0,         0,         0,
            0,
];

/// Step-size selector increments of the HD high-frequency subband
pub const HD_QUANTIZE_FACTOR_SELECT_OFFSET_HF: [i16; 17] = [
      -6,   -6,   -6,   -5,   -4,   -3,   -2,    0,    2,    5,    7,   10,   13,   17,   20,   22,
      22,
];
