// @generated by kugiri-compiler from the JSON score tables in models/.
// Run `cargo run -p kugiri-compiler` to regenerate. Do not edit by hand.

#[cfg(feature = "ja")]
pub(crate) mod ja {
    use crate::model::Model;

    pub(crate) static MODEL: Model = Model {
        uw1: &[
            (0x5c71, 184),
            (0x5ca9, -6478),
            (0x96e8, -310),
        ],
        uw2: &[
            (0x5ddd, -57),
            (0x7a7a, 242),
            (0x8c37, -6479),
        ],
        uw3: &[
            (0x3002, -33),
            (0x82b1, -128),
            (0x9ce5, 95),
        ],
        uw4: &[
            (0x306b, 16),
            (0x306e, 38),
            (0x306f, 27),
            (0x3092, -21),
        ],
        uw5: &[
            (0x6708, 147),
            (0x68ee, -6479),
            (0x98a8, -203),
        ],
        uw6: &[
            (0x6797, -6479),
            (0x6c34, -174),
            (0x706b, 66),
        ],
        bw1: &[
            (0xcc3e05ca9, -6479),
            (0xce50072ac, 211),
        ],
        bw2: &[
            (0x600204e16, 2000),
            (0x60040660e, 2000),
            (0x608c06700, 2000),
            (0x60980307e, 2000),
            (0x6098030a2, 2000),
            (0x609e059cb, 2000),
            (0x60cc04f7f, 2000),
            (0x60d603059, 2000),
            (0x60d605bc4, 2000),
            (0x60dc030c6, 2000),
            (0x60dc04eba, 2000),
            (0x60dc04f7f, 2000),
            (0x60dc0540d, 2000),
            (0x60dc060c5, 2000),
            (0x60dc06c7a, 2000),
            (0x60de030b1, 2000),
            (0x60de04e2d, 2000),
            (0x60de05929, 2000),
            (0x60de06674, 2000),
            (0x60de066c7, 2000),
            (0x611603053, 2000),
            (0x612406301, 2000),
            (0x612406574, 2000),
        ],
        bw3: &[
            (0xe656096ea, -88),
            (0x1186e06797, -6479),
        ],
        tw1: &[
            (0x1ccac12dd40661f, 133),
        ],
        tw2: &[
            (0x1987c0e656096ea, 172),
        ],
        tw3: &[
            (0x1ccac0cc3e096ea, -119),
        ],
        tw4: &[
            (0x1a3b80b9520661f, -6479),
            (0x25ba80cc3e05ca9, -246),
        ],
        base: -600,
    };
}

#[cfg(feature = "ja-knbc")]
pub(crate) mod ja_knbc {
    use crate::model::Model;

    pub(crate) static MODEL: Model = Model {
        uw1: &[
            (0x5c71, 184),
            (0x5ca9, -1333),
            (0x96e8, -310),
        ],
        uw2: &[
            (0x5ddd, -57),
            (0x7a7a, 242),
            (0x8c37, -1333),
        ],
        uw3: &[
            (0x82b1, -128),
            (0x9ce5, 95),
        ],
        uw4: &[
            (0x306b, -18),
            (0x306f, 24),
        ],
        uw5: &[
            (0x6708, 147),
            (0x68ee, -1333),
            (0x98a8, -203),
        ],
        uw6: &[
            (0x6797, -1333),
            (0x6c34, -174),
            (0x706b, 66),
        ],
        bw1: &[
            (0xcc3e05ca9, -1333),
            (0xce50072ac, 211),
        ],
        bw2: &[
            (0x600205f85, 2000),
            (0x60d603044, 2000),
            (0x60de05929, 2000),
            (0x60de09045, 2000),
            (0x610409045, 2000),
        ],
        bw3: &[
            (0xe656096ea, -88),
            (0x1186e06797, -1333),
        ],
        tw1: &[
            (0x1ccac12dd40661f, 133),
        ],
        tw2: &[
            (0x1987c0e656096ea, 172),
        ],
        tw3: &[
            (0x1ccac0cc3e096ea, -119),
        ],
        tw4: &[
            (0x1a3b80b9520661f, -1333),
            (0x25ba80cc3e05ca9, -246),
        ],
        base: -600,
    };
}

#[cfg(feature = "th")]
pub(crate) mod th {
    use crate::model::Model;

    pub(crate) static MODEL: Model = Model {
        uw1: &[
            (0xe02, -310),
            (0xe03, 184),
            (0xe11, -1049),
        ],
        uw2: &[
            (0xe04, -57),
            (0xe05, 242),
            (0xe12, -1055),
        ],
        uw3: &[
            (0xe06, -128),
            (0xe07, 95),
        ],
        uw4: &[
            (0xe0e, 54),
        ],
        uw5: &[
            (0xe08, -203),
            (0xe09, 147),
            (0xe13, -1055),
        ],
        uw6: &[
            (0xe0a, 66),
            (0xe0b, -174),
            (0xe15, -1055),
        ],
        bw1: &[
            (0x1c1800e0d, 211),
            (0x1c2000e11, -1055),
        ],
        bw2: &[
            (0x1c3200e1b, 2000),
            (0x1c4e00e01, 2000),
            (0x1c5000e14, 2000),
            (0x1c9200e2d, 2000),
        ],
        bw3: &[
            (0x1c1c00e0f, -88),
            (0x1c2400e15, -1055),
        ],
        tw1: &[
            (0x383801c1e00e10, 133),
        ],
        tw2: &[
            (0x384001c1c00e0f, 172),
        ],
        tw3: &[
            (0x383801c2000e0f, -119),
        ],
        tw4: &[
            (0x383c01c2000e11, -246),
            (0x384c01c2200e10, -1055),
        ],
        base: -600,
    };
}

#[cfg(feature = "zh-hans")]
pub(crate) mod zh_hans {
    use crate::model::Model;

    pub(crate) static MODEL: Model = Model {
        uw1: &[
            (0x5c71, -310),
            (0x5e02, -3622),
            (0x6c34, 184),
        ],
        uw2: &[
            (0x7535, -57),
            (0x8111, 242),
            (0x94f6, -3626),
        ],
        uw3: &[
            (0x4e60, 95),
            (0x5b66, -128),
        ],
        uw4: &[
            (0x662f, 22),
            (0x7684, 31),
        ],
        uw5: &[
            (0x4f5c, 147),
            (0x5de5, -203),
            (0x884c, -3626),
        ],
        uw6: &[
            (0x53cb, -174),
            (0x670b, 66),
            (0x82b1, -3626),
        ],
        bw1: &[
            (0xaf9c05e02, -3626),
            (0xe0d608f66, 211),
        ],
        bw2: &[
            (0x9d7404eba, 2000),
            (0x9d74053d7, 2000),
            (0x9dd807684, 2000),
            (0x9e2e04f7f, 2000),
            (0x9f3605927, 2000),
            (0xa81005168, 2000),
            (0xa8fa0662f, 2000),
            (0xcc5e06574, 2000),
            (0xe80604fe1, 2000),
            (0xed0804f7f, 2000),
            (0x1175204eba, 2000),
            (0x1fe1804f9b, 2000),
            (0x1fe1808ba9, 2000),
        ],
        bw3: &[
            (0x129ec082b1, -3626),
            (0x131bc0673a, -88),
        ],
        tw1: &[
            (0x263780ce74057ce, 133),
        ],
        tw2: &[
            (0x15f38131bc0673a, 172),
        ],
        tw3: &[
            (0x263780af9c0673a, -119),
        ],
        tw4: &[
            (0x19ce80af9c05e02, -246),
            (0x221300bc04057ce, -3626),
        ],
        base: -600,
    };
}

#[cfg(feature = "zh-hant")]
pub(crate) mod zh_hant {
    use crate::model::Model;

    pub(crate) static MODEL: Model = Model {
        uw1: &[
            (0x5c71, -310),
            (0x6c34, 184),
            (0x884c, -3622),
        ],
        uw2: &[
            (0x8166, 242),
            (0x82b1, -3626),
            (0x96fb, -57),
        ],
        uw3: &[
            (0x5b78, -128),
            (0x7fd2, 95),
        ],
        uw4: &[
            (0x662f, 22),
            (0x7684, 31),
        ],
        uw5: &[
            (0x53cb, 147),
            (0x5712, -3626),
            (0x670b, -203),
        ],
        uw6: &[
            (0x706b, 66),
            (0x7a97, -3626),
            (0x8eca, -174),
        ],
        bw1: &[
            (0x125000884c, -3626),
            (0x131b606a5f, 211),
        ],
        bw2: &[
            (0x9d7404eba, 2000),
            (0x9d74053d7, 2000),
            (0x9efe04eba, 2000),
            (0x9f3605927, 2000),
            (0xa02207684, 2000),
            (0xa8fa0662f, 2000),
            (0xcae805168, 2000),
            (0xcc5e0532f, 2000),
            (0xe80608cc7, 2000),
            (0xed0804f7f, 2000),
            (0xee7c04f7f, 2000),
            (0x1fe1804f7f, 2000),
            (0x1fe1804f9b, 2000),
        ],
        bw3: &[
            (0xaf9c05e02, -88),
            (0x1056207a97, -3626),
        ],
        tw1: &[
            (0x15f380bc0409280, 133),
        ],
        tw2: &[
            (0x24a000af9c05e02, 172),
        ],
        tw3: &[
            (0x15f381250005e02, -119),
        ],
        tw4: &[
            (0x15c481109809280, -3626),
            (0x17808125000884c, -246),
        ],
        base: -600,
    };
}
