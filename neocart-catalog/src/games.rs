//! The game table. Entries are keyed by MAME set name; member lists are in
//! assembly order with the hashes the adapters verify against.

use neocart_core::transform::{k2k2, pvc, sma};
use neocart_core::{AreaSpec, Game, Genre, Member, Recipe};

const fn rom(name: &'static str, size: u64, crc32: u32, sha1: &'static str) -> Member {
    Member {
        name,
        size,
        crc32,
        sha1,
    }
}

const fn area(size: u64, members: &'static [Member]) -> AreaSpec {
    AreaSpec { size, members }
}

const fn none() -> AreaSpec {
    AreaSpec {
        size: 0,
        members: &[],
    }
}

/// A fix layer derived from the sprite data rather than read from a dump.
const fn fix(size: u64) -> AreaSpec {
    AreaSpec {
        size,
        members: &[],
    }
}

/// Every supported title, in rough board-family order. Clone sets sit next
/// to their parents and usually differ only in their program ROMs.
pub(crate) static GAMES: &[Game] = &[
    Game {
        id: "mslug",
        parent: None,
        name: "Metal Slug - Super Vehicle-001",
        manufacturer: "Nazca",
        year: 1996,
        genre: Genre::Action,
        screenshot: 99,
        recipe: Recipe::Common,
        areas: [
            area(
                0x200000,
                &[
                    rom("201-p1.p1", 0x200000, 0x08231458, "88570d189e2fe00df6c0a568d9a6f946c2eda524"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("201-s1.s1", 0x20000, 0x14807bab, "36f308744b3970378724643a1e6c980b3f583dd2"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("201-m1.m1", 0x20000, 0x00a0b06f, "2a695dda1852059e03f1ab7b874a45bbe64af386"),
                ],
            ),
            area(
                0x800000,
                &[
                    rom("201-v1.v1", 0x400000, 0x7664036c, "0f9c7330298df8c5514e9ae3c56377b9470c7e79"),
                    rom("201-v2.v2", 0x400000, 0xfbf8a247, "17f7b71ac0d77f3ca05a32d3eb310340a7a74a59"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("201-c1.c1", 0x400000, 0xdcd76ab2, "c872585c15c7393f04862a297823f0c32d2cff23"),
                    rom("201-c2.c2", 0x400000, 0x025be5b0, "8135b7176628e0a1dbfe29b2328c7914bcb8bfb3"),
                    rom("201-c3.c3", 0x400000, 0xfcc79c0c, "0226a3bc212e62bc0e39fe21e079711401ddebb7"),
                    rom("201-c4.c4", 0x400000, 0x7c04a784, "253920eb445731e10655f4dadd3d84e49526688a"),
                ],
            ),
        ],
    },
    Game {
        id: "kof94",
        parent: None,
        name: "The King of Fighters '94",
        manufacturer: "SNK",
        year: 1994,
        genre: Genre::Fighting,
        screenshot: 68,
        recipe: Recipe::Common,
        areas: [
            area(
                0x200000,
                &[
                    rom("055-p1.p1", 0x200000, 0x1aa3e568, "1ebaaa557905d553358b6fd3231acaf1d3f5e546"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("055-s1.s1", 0x20000, 0x210254b2, "a8d4ef409bd00aab52a33443ead5fb6af1155d60"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("055-m1.m1", 0x20000, 0x1fd53240, "b570ab8a61815d7021e4e80c1af1c7794dda9a39"),
                ],
            ),
            area(
                0x600000,
                &[
                    rom("055-v1.v1", 0x200000, 0x0662218f, "5e545d4989acf0c8ad03e0259c10c7dc62cb5b22"),
                    rom("055-v2.v2", 0x200000, 0xc76e7369, "d4b30a8890ef00249e02b3209eaf8e7aceb04b67"),
                    rom("055-v3.v3", 0x200000, 0xbefbd2d1, "f2f5c015635d0c623c4cfcdd7f20ade07afc58ca"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("055-c1.c1", 0x200000, 0x6e4c34c6, "efc235c3155aa9f43f1a2fb8501cc3564f096535"),
                    rom("055-c2.c2", 0x200000, 0xe468eeb6, "1a0827ce5ceca03f3970120230f7e8fa7bce4c58"),
                    rom("055-c3.c3", 0x200000, 0x94bdfade, "258fb26ce403d648e90bedc43ba81a34fe929817"),
                    rom("055-c4.c4", 0x200000, 0x8d26aee7, "52e631b08a52197c86881b20e0854ddb16e3c26b"),
                    rom("055-c5.c5", 0x200000, 0xafd44e28, "894392e71b94ec4352bb8967a2b85d916a46fff1"),
                    rom("055-c6.c6", 0x200000, 0xb5784ad6, "d89892422fb637520b2e75db2a4082f06cdd2974"),
                    rom("055-c7.c7", 0x200000, 0xbbac0b46, "c455a929a0654005ba0b25748cf163c791356c59"),
                    rom("055-c8.c8", 0x200000, 0x34189583, "69e9281e3cd6130d82df0bc01af58f7801ca76b1"),
                ],
            ),
        ],
    },
    Game {
        id: "kof95",
        parent: None,
        name: "The King of Fighters '95",
        manufacturer: "SNK",
        year: 1995,
        genre: Genre::Fighting,
        screenshot: 69,
        recipe: Recipe::Common,
        areas: [
            area(
                0x200000,
                &[
                    rom("084-p1.p1", 0x200000, 0x2341216d, "8597946da254af0233f56eec3189ee1654e38abf"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("084-s1.s1", 0x20000, 0xd0a515ef, "3b9137a94376fdb5feb518545574c66da3030559"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("084-m1.m1", 0x20000, 0x06e711b3, "50a216be7449b11aa2504fdd439868e2d265f661"),
                ],
            ),
            area(
                0x600000,
                &[
                    rom("084-v1.v1", 0x400000, 0xaf7b34ad, "19d13b1b6c3a685684dddef66a0463ad045e65c0"),
                    rom("084-v2.v2", 0x200000, 0x895044d4, "d152c6e681d1b51beb5136e171fd81585532983f"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("084-c1.c1", 0x200000, 0x2365801c, "162de3283b6c4cea78d961ce279948d6a311271f"),
                    rom("084-c2.c2", 0x200000, 0x296d56c3, "36b45a2cb013ff243ad2c6f6e6b47f09971e36ca"),
                    rom("084-c3.c3", 0x200000, 0xbb351084, "048acbe0c0aa78804058f8e6f6ecd4bdc2c92ef2"),
                    rom("084-c4.c4", 0x200000, 0xa50e0784, "3c822bf13eb445f4efdd807b20c6615cfb2c3e44"),
                    rom("084-c5.c5", 0x200000, 0x5cbf13b8, "1690eea9b15d1f2fbf136845768abf30579c8647"),
                    rom("084-c6.c6", 0x200000, 0xfc1c1877, "077b2566a4c5e1fc7014621f7818b859f6c94b36"),
                    rom("084-c7.c7", 0x200000, 0x3f235573, "b158f4537a7f28e0ecca1b4aa416d7fa27bcedab"),
                    rom("084-c8.c8", 0x200000, 0x9da1e343, "6e203ddb248fa9bb995715722afce107965c7746"),
                ],
            ),
        ],
    },
    Game {
        id: "kof95a",
        parent: Some("kof95"),
        name: "The King of Fighters '95 (alt)",
        manufacturer: "SNK",
        year: 1995,
        genre: Genre::Fighting,
        screenshot: 69,
        recipe: Recipe::Kof95a,
        areas: [
            area(
                0x200000,
                &[
                    rom("084-epr.ep1", 0x80000, 0x50048a9a, "8dec4c26ad95ab549db05edda48adf53e1c99597"),
                    rom("084-epr.ep2", 0x80000, 0xc431d424, "278c909a41bfd45f2e07050a41e5b14f64836e21"),
                    rom("084-epr.ep3", 0x80000, 0x2e6b6604, "79ca269c8e931aefcfda1871ceb24807a335995c"),
                    rom("084-epr.ep4", 0x80000, 0xc7d42715, "31212c176e754494e5be9cb8638c4793e8380fef"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("084-s1.s1", 0x20000, 0x27fd805b, "4b833b6aa810228dd24267135d633e4e7169de1c"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("084-m1.m1", 0x20000, 0x0b578022, "fee0eddc6e7341bd6a0c968f1e025a6a37823fbf"),
                ],
            ),
            area(
                0x600000,
                &[
                    rom("084-v1.v1", 0x400000, 0x6de42ab3, "caafa8d500ce5b169f786f28aab52830a2f9883d"),
                    rom("084-v2.v2", 0x200000, 0xf74e737b, "db58423a30363e4a928343b4110315136e1af82e"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("084-c1.c1", 0x200000, 0x11b8f7e3, "861f8cfd7a12764aacbf6c8fa079b9b0615504ce"),
                    rom("084-c2.c2", 0x200000, 0xd4d5a090, "12abb9ff1fb8979ab3c3a20affa824aaa399d654"),
                    rom("084-c3.c3", 0x200000, 0x7effa6cf, "89f7c19ca562c1dfe6b2a9e910548330f2b40227"),
                    rom("084-c4.c4", 0x200000, 0x9d87aa24, "b6d0f48c78a05feccbeecde755e5e08385f557d5"),
                    rom("084-c5.c5", 0x200000, 0x7535def6, "c8c4cb902849f3c5e0dff9e2ed715aa7d8a0b99d"),
                    rom("084-c6.c6", 0x200000, 0xc56b107d, "96c23cd9c0724581c835e8e4c86a67a758a81ec2"),
                    rom("084-c7.c7", 0x200000, 0xb5dac756, "aed6cecca067ad0bba7c50cc60985d5c79df402a"),
                    rom("084-c8.c8", 0x200000, 0xee28f36e, "830d30f51cd82a6aa6b4d1f1dff8b510f2c2308e"),
                ],
            ),
        ],
    },
    Game {
        id: "kof96",
        parent: None,
        name: "The King of Fighters '96",
        manufacturer: "SNK",
        year: 1996,
        genre: Genre::Fighting,
        screenshot: 70,
        recipe: Recipe::Common,
        areas: [
            area(
                0x400000,
                &[
                    rom("214-p1.p1", 0x200000, 0xfef6b5de, "5f598ee0ba32e150b391b876168889b66613540b"),
                    rom("214-p2.sp2", 0x200000, 0x422674bb, "70a31fd16cb04c736cfe38d720886ebbc4fbea71"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("214-s1.s1", 0x20000, 0xfc6759c9, "45013cc560ab7dc267fed92007f57037611a2a60"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("214-m1.m1", 0x20000, 0x81b692c4, "49a74b164997809584503b61903206b3a5a2ddef"),
                ],
            ),
            area(
                0xa00000,
                &[
                    rom("214-v1.v1", 0x400000, 0xf73823bc, "16828b42764628db2f8c50c11655ad4937ca7673"),
                    rom("214-v2.v2", 0x400000, 0x8f95edb8, "d59bcbb01b81a6c36e8159b80648da17b8531235"),
                    rom("214-v3.v3", 0x200000, 0x41c4b119, "9e932384dddcb4ac324127abda00f6ce560e83c4"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("214-c1.c1", 0x400000, 0x0e1be4f7, "deaefeacc03b10ddaf6fac01165b05ab5433a15b"),
                    rom("214-c2.c2", 0x400000, 0xd3486dec, "7f9d1eceffc84eaeaf51176ee320f654bec86ff7"),
                    rom("214-c3.c3", 0x400000, 0xdc3e9f30, "be3c229fa6c23b819eb3858e824d33c8f205545c"),
                    rom("214-c4.c4", 0x400000, 0xd4d46e1e, "96936a582dc5c8f79508daec7b57cd278d5d8a07"),
                    rom("214-c5.c5", 0x400000, 0xdae9ac7f, "4a2d10d4df1ad2857f9e5552b973f12892144569"),
                    rom("214-c6.c6", 0x400000, 0x02612d7d, "b0317b83eddd8634cc751c3779a052fc0462b5a6"),
                    rom("214-c7.c7", 0x400000, 0xca04e79e, "472ef0a71536c12481c1c4016ae78ff53be1d619"),
                    rom("214-c8.c8", 0x400000, 0xa0154537, "b8a2b2a1f58ff70696cfb095669de75e1e2de4e2"),
                ],
            ),
        ],
    },
    Game {
        id: "kof97",
        parent: None,
        name: "The King of Fighters '97",
        manufacturer: "SNK",
        year: 1997,
        genre: Genre::Fighting,
        screenshot: 71,
        recipe: Recipe::Common,
        areas: [
            area(
                0x500000,
                &[
                    rom("232-p1.p1", 0x100000, 0x364045c0, "c56ba3371f4967d0befee57d1e013d5e314e3a72"),
                    rom("232-p2.sp2", 0x400000, 0x63136194, "e3b51c8b3bb04feade964b9d90157609788aac13"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("232-s1.s1", 0x20000, 0xafde4ea2, "bda6308a9f89c364c61f99f6b3b23279ee952bae"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("232-m1.m1", 0x20000, 0xf008d0a0, "5e493c888e9ceddc3f789830f4997332d23a107b"),
                ],
            ),
            area(
                0xc00000,
                &[
                    rom("232-v1.v1", 0x400000, 0x63a933de, "dec9bd318572d56795797506a6922f6d69f7e163"),
                    rom("232-v2.v2", 0x400000, 0xe08d4773, "8b18b5f47ec12aa8c83f5238bddd00d02eb8a67b"),
                    rom("232-v3.v3", 0x400000, 0xecfaa583, "2ef8db80a43284faca1764258c1dfb4bd6d6111a"),
                ],
            ),
            none(),
            area(
                0x1800000,
                &[
                    rom("232-c1.c1", 0x400000, 0xb32b2c35, "40a5891c29d650f92cd2139eea77cb7aadc324ae"),
                    rom("232-c2.c2", 0x400000, 0x3e6b6ba6, "ec8357f6e7732ca1eee8e74ef8c6b74fcba5ab4d"),
                    rom("232-c3.c3", 0x400000, 0x1e69c00a, "03f5552153aaefce07d4af6b6de7332d8ca87959"),
                    rom("232-c4.c4", 0x400000, 0x1bc09039, "585480ac2dadf034eb5a265503efabffe043c8b5"),
                    rom("232-c5.c5", 0x400000, 0xb69fc996, "7391fc3913ce264c564050f4a7b6f8068a252e0b"),
                    rom("232-c6.c6", 0x400000, 0xfb528c96, "ab726ac9f90dcf1b34d949ed96062203b898c279"),
                ],
            ),
        ],
    },
    Game {
        id: "neodrift",
        parent: None,
        name: "Neo Drift Out - New Technology",
        manufacturer: "Visco",
        year: 1996,
        genre: Genre::Driving,
        screenshot: 112,
        recipe: Recipe::Common,
        areas: [
            area(
                0x200000,
                &[
                    rom("213-p1.p1", 0x200000, 0x17c7627e, "3d87f85b907dd33c03aa3c5ced243e1a6a794919"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("213-s1.s1", 0x20000, 0x44f00551, "23ee9c833faa68bbfa6e7642ec762e5bbd71788a"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("213-m1.m1", 0x20000, 0x7abb731c, "2be344980140a417f5c0b5793aea178204017087"),
                ],
            ),
            area(
                0x800000,
                &[
                    rom("213-v1.v1", 0x400000, 0x2d9e8b10, "e0f05dc8a89967d69195b16d30f64821dbae6bd4"),
                    rom("213-v2.v2", 0x400000, 0xb5858c4d, "bc0168266f91b23e3b6be99aef6e429eee073dc0"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("213-c1.c1", 0x400000, 0x99f5b72b, "4393edac08c96b9303c11a5f8db399bf603d4734"),
                    rom("213-c2.c2", 0x400000, 0x12ee1ed7, "c6b5260448577d724c000ae33e6d3d13fc758540"),
                ],
            ),
        ],
    },
    Game {
        id: "pulstar",
        parent: None,
        name: "Pulstar",
        manufacturer: "Aicom",
        year: 1995,
        genre: Genre::Shooter,
        screenshot: 126,
        recipe: Recipe::Common,
        areas: [
            area(
                0x300000,
                &[
                    rom("089-p1.p1", 0x100000, 0x873eb975, "4f8e4cb5baf91e1cca34bf1f0d49320974ea4956"),
                    rom("089-p2.sp2", 0x200000, 0x0e75607f, "699210aada19971a5cb1dce9699f80718761da34"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("089-s1.s1", 0x20000, 0x55618fa4, "5be473e5e33380b6395fa54e220ed3626301a4e0"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("089-m1.m1", 0x20000, 0xff413a67, "ccba8d9a5d7311a8b001873b141e23be8cdda959"),
                ],
            ),
            area(
                0x800000,
                &[
                    rom("089-v1.v1", 0x400000, 0x0e7e4d9e, "65ed3045f70a576f389b3a8d6e29b079ec1465da"),
                    rom("089-v2.v2", 0x400000, 0xa1a665a5, "f1c4d7209e0ec8eb5c2acc7e6f34c11dadb546f1"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("089-c1.c1", 0x400000, 0x54c83a54, "97d904bcd24ea2503281ce67e8b7c7a998bd7f57"),
                    rom("089-c2.c2", 0x400000, 0x3ed0d247, "b69a0930dcfd14c0bda4978d9f96129970946a2f"),
                    rom("089-c3.c3", 0x400000, 0x873c8cd6, "66e6335833ceda01b35c8280fa8bcfc947b22d3e"),
                    rom("089-c4.c4", 0x400000, 0x2d2dad84, "e07111aa3829b531b67a62e337f368a188bc6b03"),
                    rom("089-c5.c5", 0x400000, 0x4756122e, "fa229668bf7ddbecf57c8a974d9870178c40108e"),
                    rom("089-c6.c6", 0x400000, 0x12c47ab8, "b9434f9f6cf28726b04a7251c7934e78b856855d"),
                    rom("089-c7.c7", 0x400000, 0xc25c5224, "948a3849ef8e4a1ff3d6eb4e3df15c19e899d06b"),
                    rom("089-c8.c8", 0x400000, 0x8a464e3e, "cbd4993d5d95d7dea4f5ec329e8b8fc9963e2e7a"),
                ],
            ),
        ],
    },
    Game {
        id: "samsho3",
        parent: None,
        name: "Samurai Shodown III",
        manufacturer: "SNK",
        year: 1995,
        genre: Genre::Fighting,
        screenshot: 142,
        recipe: Recipe::Kof95a,
        areas: [
            area(
                0x400000,
                &[
                    rom("087-epr.ep1", 0x80000, 0x19b9a034, "be95b26a0d30abd866dfffda8c9650548764213c"),
                    rom("087-epr.ep2", 0x80000, 0x01058a81, "51aa68529a50d75ab051e9ed694be575d20d8769"),
                    rom("087-epr.ep3", 0x80000, 0x75a7f1c3, "7a7e5c376a82120ae0ede92b77e1e1a890bac4eb"),
                    rom("087-epr.ep4", 0x80000, 0x72f4cad8, "b44c4739345a604a914ab7669148915619bb1cdf"),
                    rom("087-p5.p5", 0x200000, 0xf1a01537, "29564ffd4b8f2e42064112ede59ab61e10bd4a9a"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("087-s1.s1", 0x20000, 0x1a1264a3, "9d75dbd27ab9f6dd2368eb076a7e21d5bcb81821"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("087-m1.m1", 0x20000, 0x0cd4015d, "1fd0f0bf5e5c593d049841fb135246bcae3a87ac"),
                ],
            ),
            area(
                0x600000,
                &[
                    rom("087-v1.v1", 0x400000, 0x6f7cb87a, "2ca41ff528aa0bd5264929998efe518b7839defa"),
                    rom("087-v2.v2", 0x200000, 0x587213d9, "d09ad3d8b70d81594f64821f4b061a0cd99f6265"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("087-c1.c1", 0x200000, 0xf8478bd3, "2ad81d91f23d373980e276f9152295f9293d3d89"),
                    rom("087-c2.c2", 0x200000, 0x288c803b, "a4f2642ff0556928c61cf9cd0b34d49de9d5c668"),
                    rom("087-c3.c3", 0x200000, 0xe81c9b09, "a0b97735d7049263a1b954fe31c4cd308504579e"),
                    rom("087-c4.c4", 0x200000, 0xb25f0a9e, "6a1994bb674925d1fd2d1532d76daa32d3c4e5b0"),
                    rom("087-c5.c5", 0x200000, 0xa249994d, "8a6da47ce65687ebc5b72776a5fe8656e7ab7806"),
                    rom("087-c6.c6", 0x200000, 0x24b8d904, "0accd6f897b28ebe432ab31b7669988166f02a8d"),
                    rom("087-c7.c7", 0x200000, 0x261fb418, "12986b49a5762aafcb2d4fdfad60ceecf46c126b"),
                    rom("087-c8.c8", 0x200000, 0x74ac0d73, "0d2df55b438809ccabe04e69f8dfc5bfc2917346"),
                ],
            ),
        ],
    },
    Game {
        id: "mslugx",
        parent: None,
        name: "Metal Slug X - Super Vehicle-001",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Action,
        screenshot: 105,
        recipe: Recipe::Kof95a,
        areas: [
            area(
                0x500000,
                &[
                    rom("250-p1.p1", 0x100000, 0x38a55297, "b51272356cadeef3a4a8d6c7435126026eba6422"),
                    rom("250-p2.ep1", 0x400000, 0x0fc05c61, "751879a15149ea18276915cfce6752071362fa0f"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("250-s1.s1", 0x20000, 0x924b1271, "1cf746f630379772ffc4ca1c44021d350bcc2bc9"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("250-m1.m1", 0x20000, 0x9e4b1656, "b0cb01782a51f0599dd4bb34a334668337967948"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("250-v1.v1", 0x400000, 0x50347eee, "6c7e886db50686d4844d913777726b177e3bac35"),
                    rom("250-v2.v2", 0x400000, 0xebe7402c, "a43cf9dd9435561e7f11086a90d55824159b4d73"),
                    rom("250-v3.v3", 0x400000, 0x463e3ddd, "006c134fe35abc380e8bca3c19580851e901c485"),
                    rom("250-v4.v4", 0x400000, 0xb53f98f2, "647b2676411be571d735cd69e041fdacddcc454d"),
                ],
            ),
            none(),
            area(
                0x1800000,
                &[
                    rom("250-c1.c1", 0x400000, 0xcca7e83b, "8c2edb850d1684a247fb7184ac35a5b742116b24"),
                    rom("250-c2.c2", 0x400000, 0xc3448bd2, "fb3527aea627ad249fe9b1017411b8477f19bf73"),
                    rom("250-c3.c3", 0x400000, 0x48a62fba, "daf26a8349dcc29c456609520190761fe229a9c1"),
                    rom("250-c4.c4", 0x400000, 0x8e07a44d, "3dbb2fb2615fa8d92307f10233bffb5b4325e7ed"),
                    rom("250-c5.c5", 0x400000, 0x102c5c72, "d477c474c245c808d17f0bd1678c5cfd3988a561"),
                    rom("250-c6.c6", 0x400000, 0x3c38f2c1, "55f4082d31fd677b65b193faba4b43e5f7653571"),
                ],
            ),
        ],
    },
    Game {
        id: "fightfeva",
        parent: Some("fightfev"),
        name: "Fight Fever (set 2)",
        manufacturer: "Viccom",
        year: 1994,
        genre: Genre::Fighting,
        screenshot: 32,
        recipe: Recipe::FightFever,
        areas: [
            area(
                0x280000,
                &[
                    rom("060-p1.p1", 0x200000, 0x1d821ef9, "b2817e64f34a6eea15489149d17d7735b132b49a"),
                    rom("060-sp2.sp2", 0x80000, 0x9b78253d, "2c8f8061baecef6e81d9e7bbd12c38a68b801e2f"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("060-s1.s1", 0x20000, 0x41f36e13, "8e025cd45a7b20992082510db193121780132246"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("060-m1.m1", 0x20000, 0x3188b314, "2ddeba0a9038c2b14f050ca76f19de72a42ddecb"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("060-v1.v1", 0x200000, 0x7690cd1b, "999cd402b5f1a6fb72e3aacdcc343c56a14957d4"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("060-c1.c1", 0x200000, 0xcdc2fec1, "276d69a4adf69f14ec8612b95c16a8ea0bcf27c9"),
                    rom("060-c2.c2", 0x200000, 0x1309eaf5, "b29b7eeec69fe42d28c9004f1b09f96d07b00572"),
                    rom("060-c3.c3", 0x200000, 0x702a6d34, "e2de11494c7f75cbac73f3d6b3c2185de030f94f"),
                    rom("060-c4.c4", 0x200000, 0x34184c55, "25d3d651040496571cf9fbeaa398117d0e9db081"),
                ],
            ),
        ],
    },
    Game {
        id: "pbobblen",
        parent: None,
        name: "Puzzle Bobble",
        manufacturer: "Taito",
        year: 1994,
        genre: Genre::Puzzle,
        screenshot: 120,
        recipe: Recipe::Kof95a,
        areas: [
            area(
                0x80000,
                &[
                    rom("083-p1.p1", 0x80000, 0xa4977d67, "42dd1140f099c002ce977d905a91a842ca9b0846"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("083-s1.s1", 0x20000, 0xcfe3ae13, "636a513a9706c67e8cf6f5f091d1eb96c920d913"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("083-m1.m1", 0x20000, 0xd8daa4ef, "e80ee713886efba88b7f1035040222ebffdf3695"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("083-v3.v3", 0x200000, 0x5ca30656, "20cbac5113ec406d3e2fe643068c60633e797d8e"),
                    rom("083-v4.v4", 0x200000, 0x85f21561, "e8bff84c4be576480699d056669c9d91bdf8f0e8"),
                ],
            ),
            none(),
            area(
                0x200000,
                &[
                    rom("083-c5.c5", 0x100000, 0x8001f156, "ae20d5b29c2d8d5c2186bf505ea58b7796877a1a"),
                    rom("083-c6.c6", 0x100000, 0x90885196, "0394d9aec9ecec5a7d31c1e1256373743c3d9631"),
                ],
            ),
        ],
    },
    Game {
        id: "pbobblenb",
        parent: Some("pbobblen"),
        name: "Puzzle Bobble (bootleg)",
        manufacturer: "bootleg",
        year: 1994,
        genre: Genre::Puzzle,
        screenshot: 120,
        recipe: Recipe::PBobbleNB,
        areas: [
            area(
                0x80000,
                &[
                    rom("u7", 0x80000, 0x9b1a5e86, "6887b7b4c732ed8b27aa76c8269fc2deecf1e3b6"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("us1", 0x20000, 0x5c63416f, "ead8272bd2b0070e361180ecf192f197f1876073"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("um1", 0x20000, 0x96dbcbfe, "6b01af09c9374be67c41f0202cf4d566f710aedc"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("u8", 0x200000, 0x3d40e728, "53d3755638f0e1d239da4f2e64eb31f2134211ae"),
                    rom("u9", 0x200000, 0x80ffc854, "5e507fc46fa1113779181f49e90967c0db26d208"),
                ],
            ),
            none(),
            area(
                0x200000,
                &[
                    rom("uc5", 0x100000, 0x9d4faacb, "2e015afd9ab4078ccf0d533238c3486067216896"),
                    rom("uc6", 0x100000, 0x7a38644f, "1444739d73a6abb0f70a075cbe88c25da54d4b17"),
                ],
            ),
        ],
    },
    Game {
        id: "viewpoin",
        parent: None,
        name: "Viewpoint",
        manufacturer: "Sammy / Aicom",
        year: 1992,
        genre: Genre::Shooter,
        screenshot: 174,
        recipe: Recipe::Viewpoin,
        areas: [
            area(
                0x100000,
                &[
                    rom("051-p1.p1", 0x100000, 0x239e146e, "0112368c89ed032ff8ef98eca61b8b92269687af"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("051-s1.s1", 0x20000, 0xb95281b0, "ccdeaf18494355e0eb4c276bc9695dfaf9bc2343"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("051-m1.m1", 0x20000, 0x44632984, "c534364c9288198fa72397d6d01cc104e558cd34"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("051-v2.v2", 0x200000, 0x6210f733, "89a821220eceb8f5aecc23c747663fe3028520d7"),
                    rom("051-v4.v4", 0x200000, 0xdaf873db, "4987d3d32476477197ff026d386f1aa85fa2cc79"),
                ],
            ),
            none(),
            area(
                0x600000,
                &[
                    rom("051-c1.c1", 0x300000, 0x0a59511e, "9d0b74af8218cb92e0c72ce06149075a33d70795"),
                    rom("051-c2.c2", 0x300000, 0xf2a65a87, "68e154c0aa4647636d8129617d60c8ed0084b3a1"),
                ],
            ),
        ],
    },
    Game {
        id: "ssideki",
        parent: None,
        name: "Super Sidekicks",
        manufacturer: "SNK",
        year: 1992,
        genre: Genre::Sports,
        screenshot: 157,
        recipe: Recipe::Viewpoin,
        areas: [
            area(
                0x100000,
                &[
                    rom("052-p1.p1", 0x100000, 0xe556c5df, "7585953037ed2af9afafff374edb38b356e39d65"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("052-s1.s1", 0x20000, 0x356dc89e, "270bed16c1788b684c128bc0b9a9e42e14f2898b"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("052-m1.m1", 0x20000, 0x5e5ab9b1, "c763593c7288037246a4fae7d0d149264a994e3e"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("052-v1.v1", 0x200000, 0x3d12feb6, "48264cc0a01cf5adb6f8e35b720c6263fb9ad8e9"),
                ],
            ),
            none(),
            area(
                0x400000,
                &[
                    rom("052-c1.c1", 0x200000, 0xc05e1abf, "10a457e48cd8b3c96d63b8e725be563062c60ce7"),
                    rom("052-c2.c2", 0x200000, 0xa50c7465, "639cfee53cedc475744990f508939fc7b636af3a"),
                ],
            ),
        ],
    },
    Game {
        id: "kotm2",
        parent: None,
        name: "King of the Monsters 2",
        manufacturer: "SNK",
        year: 1992,
        genre: Genre::Fighting,
        screenshot: 78,
        recipe: Recipe::Kotm2,
        areas: [
            area(
                0x100000,
                &[
                    rom("039-p1.p1", 0x100000, 0x3a5dd11c, "869dddb1d94e1b40044541c2d0e2d2841decbfe4"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("039-s1.s1", 0x20000, 0x93725059, "7a11a4e55c5cf3d8ac54c29da12dd9d35720e795"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("039-m1.m1", 0x20000, 0x2b7c83b5, "576b642cb18611bedbe4e3a6b6749509bbf77d16"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("039-v2.v2", 0x200000, 0xdf2a3196, "9e0b1433d106182ef232287a654ebd831109e4c6"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("039-c1.c1", 0x200000, 0x235835d6, "fa93bc8cc4d66831a11705e2bf88a6d9202c4e10"),
                    rom("039-c2.c2", 0x200000, 0x76083673, "12002bbc43186149000835914a12ed0b90bdeae3"),
                    rom("039-c3.c3", 0x200000, 0x755ca288, "58908c6213adae3bf42ec8efc8aad6cd97fb9a2b"),
                    rom("039-c4.c4", 0x200000, 0xb9043711, "a2b6b315a69b4ca15dc05003cc7cd50d2abe6b68"),
                ],
            ),
        ],
    },
    Game {
        id: "3countb",
        parent: None,
        name: "3 Count Bout / Fire Suplex",
        manufacturer: "SNK",
        year: 1993,
        genre: Genre::Fighting,
        screenshot: 186,
        recipe: Recipe::Kotm2,
        areas: [
            area(
                0x200000,
                &[
                    rom("043-p1.p1", 0x200000, 0x073cabcc, "43e3adef023ceb96b02bff4ea3f75ef8a39830be"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("043-s1.s1", 0x20000, 0x9ba984e7, "a5757519a91d8a1b1db18e0408f03a4bdca41c41"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("043-m1.m1", 0x20000, 0x8765497f, "f7a5f09cf31c42da1e2e2569dd0c4b4c77802aee"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("043-v1.v1", 0x200000, 0xaf00dbeb, "1e4f73aa213a870548a96772a5aa652962363160"),
                    rom("043-v2.v2", 0x200000, 0x339bf63f, "9d5303858a20503a8a4534ebc6fa7d8ce0188492"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("043-c1.c1", 0x200000, 0xca472ed3, "1f05c17f0cee6bcb6de4cf79c41868632072595d"),
                    rom("043-c2.c2", 0x200000, 0xb2eecb18, "c4e8a2a8e38df20cc89abf2870097b3f15331692"),
                    rom("043-c3.c3", 0x200000, 0x8c569164, "97c9808910bd349445d1002aebe3296e4bf6f827"),
                    rom("043-c4.c4", 0x200000, 0x0c881d35, "db9e5e3b4194127e1389ebfe868e2d51be8d3b83"),
                ],
            ),
        ],
    },
    Game {
        id: "aof",
        parent: None,
        name: "Art of Fighting / Ryuuko no Ken",
        manufacturer: "SNK",
        year: 1992,
        genre: Genre::Fighting,
        screenshot: 4,
        recipe: Recipe::Kotm2,
        areas: [
            area(
                0x80000,
                &[
                    rom("044-p1.p1", 0x80000, 0xe86e50f0, "8f9e865b2c1b3869a2a51835f96fcc3b233b60c9"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("044-s1.s1", 0x20000, 0x2bb04a80, "4a332d6bde605ed20542cd6f9f01bb42237d9942"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("044-m1.m1", 0x20000, 0x9b3ff433, "8c3462ac5a39d9dee3f430f76f69d30e2ae83d6d"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("044-v2.v2", 0x200000, 0x43049eb8, "a3b4632d6b46d39b1ec9ca27b89087108189ea4c"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("044-c1.c1", 0x200000, 0xc483be8d, "605b69e52915fe53686b664370564707797b814a"),
                    rom("044-c2.c2", 0x200000, 0x2af4c354, "4c7823add391a629b7efc8691361b0115e066f52"),
                    rom("044-c3.c3", 0x200000, 0x17bf26d2, "b4f69feb60c34e66fc0e56f36a3ee646a6073a69"),
                    rom("044-c4.c4", 0x200000, 0xb004d31e, "894727912576e3629dbe18f6d795e2eeec0548e6"),
                ],
            ),
        ],
    },
    Game {
        id: "fatfury2",
        parent: None,
        name: "Fatal Fury 2 / Garou Densetsu 2",
        manufacturer: "SNK",
        year: 1992,
        genre: Genre::Fighting,
        screenshot: 29,
        recipe: Recipe::Kotm2,
        areas: [
            area(
                0x100000,
                &[
                    rom("047-p1.p1", 0x100000, 0x66075cb4, "e1de614710c8c471ced2c63fa0ad3e40859a7fbb"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("047-s1.s1", 0x20000, 0x96bd4305, "5d7a10bb50206f55e7d9e0a58fc1806f041f5b37"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("047-m1.m1", 0x20000, 0x682bb6a3, "c0489afa759b1499c114bcfbf1315679443881e1"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("047-v1.v1", 0x200000, 0x869cee4c, "68879da339ffe2b3c75861346a8ecd958736e272"),
                    rom("047-v2.v2", 0x200000, 0x0b62643e, "e8aed8b71546ba8a0704eae86216948ac0443969"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("047-c1.c1", 0x200000, 0xd81f3a7e, "5a32944a401eb016ea503384a12afc87ce261586"),
                    rom("047-c2.c2", 0x200000, 0x8814ed17, "8985c575d498db77b9535949f7d6ad987807acf5"),
                    rom("047-c3.c3", 0x200000, 0x80fa0cf9, "b561143a132f041788014abe6e1783c9bd9212b7"),
                    rom("047-c4.c4", 0x200000, 0xf707aef0, "d4b7dffc9345d01e9133886b302fc8d447eeba7f"),
                ],
            ),
        ],
    },
    Game {
        id: "sengoku2",
        parent: None,
        name: "Sengoku 2 / Sengoku Denshou 2",
        manufacturer: "SNK",
        year: 1993,
        genre: Genre::BeatEmUp,
        screenshot: 149,
        recipe: Recipe::Kotm2,
        areas: [
            area(
                0x100000,
                &[
                    rom("040-p1.p1", 0x100000, 0x8717c700, "0dd3cc19c4cd8fdf0c727c2626b74078e8705532"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("040-s1.s1", 0x20000, 0x7fab4fb8, "d761425989c67afd3e2d3503fe6c1c61f60edc65"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("040-m1.m1", 0x20000, 0x44c40841, "88043a7b5b5582235f7d3cdfd54be6e0128f082b"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("040-v1.v1", 0x200000, 0x925198ab, "c71e4a36ea91f962ae48009560fb6e469c4a8f68"),
                    rom("040-v2.v2", 0x200000, 0xf3dc59b7, "16f1a34d0650b76fdacaf28c2374e65bba83981b"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("040-c1.c1", 0x200000, 0xa1c8cf84, "e2ee66b06b4e0486d6e29fe761a5c2970cdd4da7"),
                    rom("040-c2.c2", 0x200000, 0x65c84270, "8b532c1830d713b4adcb2b872c4f52b155b69570"),
                    rom("040-c3.c3", 0x200000, 0xea39a5dc, "5dcfeb06ead02a15bb7ea241b78e095a384cb3ea"),
                    rom("040-c4.c4", 0x200000, 0xe238f0a4, "f97906a026790cd438b9b7fe74fd7b5deb2be3d9"),
                ],
            ),
        ],
    },
    Game {
        id: "wh1",
        parent: None,
        name: "World Heroes",
        manufacturer: "Alpha Denshi",
        year: 1992,
        genre: Genre::Fighting,
        screenshot: 177,
        recipe: Recipe::Kotm2,
        areas: [
            area(
                0x100000,
                &[
                    rom("053-p1.p1", 0x100000, 0x0d4e2096, "dc219d42c0487b0294e6f2737e25924163ee770b"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("053-s1.s1", 0x20000, 0x6c89c821, "052d4127bc93798a51c8d2e9ac3f3c203335907c"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("053-m1.m1", 0x20000, 0x92763ca1, "1f596de6b4a459b0ded6dd3425a877e7a699a77b"),
                ],
            ),
            area(
                0x300000,
                &[
                    rom("053-v2.v2", 0x200000, 0x8f95c1cd, "4b0a1474e8550a4db22580eb9e6b3730a19302e6"),
                    rom("053-v4.v4", 0x100000, 0xa39fdf53, "90cac72c113542d4a0cd87c3648faced272c6113"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("053-c1.c1", 0x200000, 0xc560d990, "df4b0620930859380aab7d7475be94b20312258c"),
                    rom("053-c2.c2", 0x200000, 0x36811953, "3d8133477a25bbc7a20017425372f63a628ca14f"),
                    rom("053-c3.c3", 0x200000, 0x9c7df1d3, "fae8ee3c8d439e497dfc7aff8e3beace4f6327d4"),
                    rom("053-c4.c4", 0x200000, 0x42b0df92, "b79389d09c8d34ce7e168a32b9273386ae89787c"),
                ],
            ),
        ],
    },
    Game {
        id: "kotm2p",
        parent: Some("kotm2"),
        name: "King of the Monsters 2 (proto)",
        manufacturer: "SNK",
        year: 1992,
        genre: Genre::Fighting,
        screenshot: 78,
        recipe: Recipe::Kotm2P,
        areas: [
            area(
                0x100000,
                &[
                    rom("proto_039-ep1.ep1", 0x80000, 0x1ba443fd, "dfa81de050525b52a6531263589cb739389bd0f0"),
                    rom("proto_039-ep2.ep2", 0x80000, 0x3cb9932a, "f70b9ffdd95d80d78ab5bb348eff627f0249c0bc"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_039-s1.s1", 0x20000, 0xd05b4fee, "d4d370aee3f91cdc29f6bd7a43ca68fdc25080fe"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_039-m1.m1", 0x20000, 0x0e79a047, "b33dc622ef6f23f386137557bb164131c88b2adc"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("proto_039-v2.v2", 0x200000, 0xf70aa8e7, "08da133f505db4fe2f867eda7d75b0824ad130f5"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("proto_039-c1.c1", 0x100000, 0x9c3c6ccd, "b463e35b0b1aab12f1c969d65072db2f5401bf96"),
                    rom("proto_039-c2.c2", 0x100000, 0x2418e008, "7a8425d02ff8813e5a3f2342ad7522ef44a844c9"),
                    rom("proto_039-c3.c3", 0x100000, 0x9df501af, "3ddca84722810f8f6c0673b76d42a7f0aa3ee84f"),
                    rom("proto_039-c4.c4", 0x100000, 0xb2135169, "5cfd41811698af087e739c8cf80a5b35f99475ce"),
                    rom("proto_039-c5.c5", 0x100000, 0x07fb4e12, "f95e3c27ff1a0f697ebf23e6af8c34b4b930b434"),
                    rom("proto_039-c6.c6", 0x100000, 0x81f031d5, "acefd0fb4ae32051b97feeef6497742b9a0195c3"),
                    rom("proto_039-c7.c7", 0x100000, 0x0b25554c, "1bbca0d899331253fe4da06921e10e8e618b8275"),
                    rom("proto_039-c8.c8", 0x100000, 0xad0c71d4, "860dd8fd96b84c1cb66427f2a0ec3d64b8ff84ef"),
                ],
            ),
        ],
    },
    Game {
        id: "alpham2p",
        parent: Some("alpham2"),
        name: "Alpha Mission II (prototype)",
        manufacturer: "SNK",
        year: 1991,
        genre: Genre::Shooter,
        screenshot: 1,
        recipe: Recipe::Kotm2P,
        areas: [
            area(
                0x100000,
                &[
                    rom("proto_007-ep1.ep1", 0x80000, 0x460593b5, "5d87495b652fe73b735ff6b9ca86772b017e5376"),
                    rom("proto_007-ep2.ep2", 0x80000, 0x9c28d8f8, "a125d3c495da9be1e2537d51bee983763ca55ab8"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_007-s1.s1", 0x20000, 0xca85d48a, "a1635399e4f3076c0461194e95a8d9721cf71808"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_007-m1.m1", 0x20000, 0xe7673afc, "b4e25bc833e6112da7a7244fe57994971e4362b5"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("proto_007-v1.v1", 0x100000, 0xafc33f4f, "7de4aad1c03613bc619479c96858caa276e8484e"),
                    rom("proto_007-v2.v2", 0x100000, 0xda7e562d, "39244b52a662c3f3ce9c9beadaf1c7b09c1af4d9"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("proto_007-c1.c1", 0x100000, 0xcd71c10c, "b5793e0cb53d0a63a920fe887d3b875c657a0c3a"),
                    rom("proto_007-c2.c2", 0x100000, 0x7dc8e9dd, "c9b5a49937cd3c1ba76a8a60a517f59ede1ef406"),
                    rom("proto_007-c3.c3", 0x100000, 0x9b1f3661, "f56888b9b12dec2597974f16bcfc317991dffd00"),
                    rom("proto_007-c4.c4", 0x100000, 0x864b3a6a, "e0720c8e242ca76bdce923972393933636f74023"),
                    rom("proto_007-c5.c5", 0x100000, 0x5b62fb44, "e836ab20702726049d30d1aa9e712578cf347c6e"),
                    rom("proto_007-c6.c6", 0x100000, 0x5ca008f2, "79a68a457a48e1bc48a96a1f1e37b1477571882d"),
                    rom("proto_007-c7.c7", 0x100000, 0xc3c547a5, "445e9f3218e46b67deb92d7195d3f5093899f472"),
                    rom("proto_007-c8.c8", 0x100000, 0xaff3bdb9, "7376b4be77ce9716e6d52815f076b08caf8bbdb7"),
                ],
            ),
        ],
    },
    Game {
        id: "burningfp",
        parent: Some("burningf"),
        name: "Burning Fight (prototype)",
        manufacturer: "SNK",
        year: 1991,
        genre: Genre::BeatEmUp,
        screenshot: 16,
        recipe: Recipe::Kotm2P,
        areas: [
            area(
                0x100000,
                &[
                    rom("proto_018-ep1.ep1", 0x80000, 0x082e3acc, "95b711b8665af7f09597aaba6db04f72995a63c2"),
                    rom("proto_018-ep2.ep2", 0x80000, 0x0c5a7a3b, "2f2ca645002743d23719a1ba9a5413ae872e0e26"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_018-s1.s1", 0x20000, 0x3aea1813, "2127f704bcd0e88881188616ac508d6ca47b1bd1"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_018-m1.m1", 0x20000, 0xa74bff64, "3b3ee810b925e8c846faf05687ef800c4483c7b2"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("proto_018-v1.v1", 0x100000, 0x84c08289, "4e252a74cc0ce034e98c40e223936fa7ead7b8fa"),
                    rom("proto_018-v2.v2", 0x100000, 0xc6d8a128, "dbb75916036a871a6e96ba9f0189eb3a4157da98"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("proto_018-c1.c1", 0x100000, 0x054b74ed, "42df5e963348b53c1942cf23836d66d8847944dc"),
                    rom("proto_018-c2.c2", 0x100000, 0x3b6ebdae, "fc1c4355a13f6396645e793c3ae338caac29c41a"),
                    rom("proto_018-c3.c3", 0x100000, 0x080ed208, "295f50cb7fb27cbe0a0a6cb940f24dfde27302be"),
                    rom("proto_018-c4.c4", 0x100000, 0xef6a7a38, "9e13d4eb77e113205f1b0ce52f9a7a8f51f2bee8"),
                    rom("proto_018-c5.c5", 0x100000, 0x247b0a76, "d5aa72437d9001276f12463270ef5f742e50c678"),
                    rom("proto_018-c6.c6", 0x100000, 0xb182debd, "2b05766d2bc0b2b796ee90cd737929216000b337"),
                    rom("proto_018-c7.c7", 0x100000, 0x4d911ebb, "1021b5b50aaa97cdbd41b1e43e4d072d123d4c21"),
                    rom("proto_018-c8.c8", 0x100000, 0xe15bd116, "c559766fb9f7b6298f4ede8e6ac54df38092e030"),
                ],
            ),
        ],
    },
    Game {
        id: "lresortp",
        parent: Some("lresort"),
        name: "Last Resort (prototype)",
        manufacturer: "SNK",
        year: 1992,
        genre: Genre::Shooter,
        screenshot: 87,
        recipe: Recipe::Kotm2P,
        areas: [
            area(
                0x100000,
                &[
                    rom("proto_024-ep1.ep1", 0x80000, 0x3fc946d0, "4801c364cc1fb59f7fd82a8ada00bd5052156b35"),
                    rom("proto_024-ep2.ep2", 0x80000, 0x168f0713, "a875294c1d69e82ce19a120e40c5b97df25d15e5"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_024-s1.s1", 0x20000, 0x19258118, "3f0f22bd1c520e24b08eab49265fefce0401f622"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_024-m1.m1", 0x20000, 0x5573149f, "267697fd5a3fb0af56f6548effc2f7d06dcfbb8c"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("proto_024-v1.v1", 0x100000, 0xe6d3ee3b, "197f25178a2fc0d52eb793beb376b5bdebe99ed8"),
                    rom("proto_024-v2.v2", 0x100000, 0x4e653401, "753f19261544ade21084154a2bfe1f39990acbdb"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("proto_024-c1.c1", 0x100000, 0xd4d3515a, "1ca8e4229725dc285a70f93bcc48c5976ad7668d"),
                    rom("proto_024-c2.c2", 0x100000, 0x473c35b0, "96970ea86cc4de71630e26221b5fd72bf185eff1"),
                    rom("proto_024-c3.c3", 0x100000, 0xa5074f75, "58f9796a4b22c27ca000b952d65e708a1eb034ff"),
                    rom("proto_024-c4.c4", 0x100000, 0xf7723adc, "dedf52c68b8cfab48e16bdb0e1f29d1eba7aa066"),
                    rom("proto_024-c5.c5", 0x100000, 0xa325f920, "ab6cff965ec776837e0dd189c6ce847812d71f0d"),
                    rom("proto_024-c6.c6", 0x100000, 0xab36f7c1, "453f343c2d03036edb375d7184eab310c0603c11"),
                    rom("proto_024-c7.c7", 0x100000, 0xaf6e8498, "c9e8955c80aad992c8ffd7e71c3af3de7c670777"),
                    rom("proto_024-c8.c8", 0x100000, 0x92e3b3c6, "06396fe452fc319e838c6df441839029c8a1044a"),
                ],
            ),
        ],
    },
    Game {
        id: "gpilotsp",
        parent: Some("gpilots"),
        name: "Ghost Pilots (prototype)",
        manufacturer: "SNK",
        year: 1991,
        genre: Genre::Shooter,
        screenshot: 42,
        recipe: Recipe::GpilotsP,
        areas: [
            area(
                0x100000,
                &[
                    rom("proto_020-p1a.p1", 0x80000, 0x39d71eff, "fcec89b71fa52bacd647c55d976c9a4c13230419"),
                    rom("proto_020-p2a.p2", 0x80000, 0x22ec1daf, "06f097e987d87483208bf28ba0d8103d8cbfb0f2"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_020-s1.s1", 0x20000, 0xf5067381, "dd8d98439c755ad758c84efc1f531835f038f09e"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("proto_020-m1.m1", 0x20000, 0xf004cfdc, "1d8520840cd032815fd9b29bea1d4f33e9214218"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("proto_020-v11.v11", 0x100000, 0xb9351b13, "5f1593d0a382f83b8fd0cda8a701381ad4b6e96a"),
                    rom("proto_020-v12.v12", 0x100000, 0xcbeaf327, "a9caebf93c1cf80b3c7dec21e438e84425fe3206"),
                ],
            ),
            none(),
            area(
                0x800000,
                &[
                    rom("proto_020-c1.c1", 0x100000, 0xb0681d78, "7500c2691490c63256b55786947d19853906dabb"),
                    rom("proto_020-c2.c2", 0x100000, 0xf0700795, "a50f07bfb5ce578c5849b113348d68e1ae005323"),
                    rom("proto_020-c3.c3", 0x100000, 0x9bc22854, "8ea7b2dd38fc8dd3a17dc797758108febb764f09"),
                    rom("proto_020-c4.c4", 0x100000, 0x639377ac, "0073c0c0370a363434a44136c5233fbdb152dde3"),
                    rom("proto_020-c5.c5", 0x100000, 0xec51525d, "d013138e50064ae730a9eea9f1b27fee97fa8882"),
                    rom("proto_020-c6.c6", 0x100000, 0x3bb268ac, "111eeb7d515529010b501a49ac01c78017ba0b2c"),
                    rom("proto_020-c7.c7", 0x100000, 0xc03fa4c9, "eaae40f2f78cd5e8ce2a06d824c610518acbbb79"),
                    rom("proto_020-c8.c8", 0x100000, 0x2a55f2c3, "287fe5272cfe70cc96d784503787eb70d22c809f"),
                ],
            ),
        ],
    },
    Game {
        id: "dragonsh",
        parent: None,
        name: "Dragon's Heaven (development)",
        manufacturer: "FACE",
        year: 1991,
        genre: Genre::Fighting,
        screenshot: 25,
        recipe: Recipe::DragonsH,
        areas: [
            area(
                0x100000,
                &[
                    rom("ep1.bin", 0x80000, 0xcea0a124, "a1201799088673564466a3306014ddf3151a2e2f"),
                    rom("ep2.bin", 0x80000, 0x5c83fc14, "0d8256c790b1bd15cbbc4a25939e6234f1e65994"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("s1.s1", 0x20000, 0xb050f7a3, "9e9e4b7f181ee6c1cebffe279e8657ce83e15396"),
                ],
            ),
            none(),
            none(),
            none(),
            area(
                0x400000,
                &[
                    rom("no3.bin", 0x200000, 0x50e31253, "08e06b487cd87a6f22e2382a516940f9c1b7c1d0"),
                    rom("no4.bin", 0x200000, 0xaed0abbc, "d696fc902e6d91ee4b4776a75d8d0fb7c5a75102"),
                ],
            ),
        ],
    },
    Game {
        id: "kof98",
        parent: None,
        name: "The King of Fighters '98",
        manufacturer: "SNK",
        year: 1998,
        genre: Genre::Fighting,
        screenshot: 74,
        recipe: Recipe::Kof98,
        areas: [
            area(
                0x600000,
                &[
                    rom("242-p1.p1", 0x200000, 0xcc2bfae3, "8cc065f46aa34f08cda0e04c1934f45a7a8f445a"),
                    rom("242-p2.sp2", 0x400000, 0x09dbcf68, "3ec07c3d9faef0203cdc76e9ba12f1763e56063b"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("242-s1.s1", 0x20000, 0x8a34db9e, "7a2f9113d1fc5acefb1f1c842c86d23f507c1377"),
                ],
            ),
            area(
                0x40000,
                &[
                    rom("242-m1.m1", 0x40000, 0x177411ce, "82dd81d757e64fddbc2410a3c9addf3f4a2041f7"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("242-v1.v1", 0x400000, 0x1f772818, "8badd10711ba580c39382ef18ca5abf51da34c35"),
                    rom("242-v2.v2", 0x400000, 0xe1eb367e, "314e85921c0d13ffc50e2202c6c190f031f5dc4a"),
                    rom("242-v3.v3", 0x400000, 0xf70cb2ef, "a0a10ef9173a127b9ea09669144d8ec583f74c26"),
                    rom("242-v4.v4", 0x400000, 0xaa5ca483, "7e1238116f00e0fbbc346b6eecc59ac489bc1a87"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("242-c1.c1", 0x400000, 0xe0c77e8f, "531d023ae58e386930363779d5ee42186a3ed701"),
                    rom("242-c2.c2", 0x400000, 0xe05032ad, "7a89b55a8dcbc75703d6267884ee0b2c2b5983c0"),
                    rom("242-c3.c3", 0x400000, 0x0df68754, "41bbe869c10623d88419df8c5be3af76e2659c9c"),
                    rom("242-c4.c4", 0x400000, 0x6f4deb23, "216f4e5f68ecc2a6e473f914cd1df0dd66c1d1a8"),
                    rom("242-c5.c5", 0x400000, 0x322b2801, "a8cc3a71244911129015f18eaf84f78663429a40"),
                    rom("242-c6.c6", 0x400000, 0x9a06d4e3, "c6f04b700b1961774c81186194636ab58dde0801"),
                    rom("242-c7.c7", 0x400000, 0x5d10f48d, "fc617d5fa11d3a6347dcb821bf856494f90b4ba7"),
                    rom("242-c8.c8", 0x400000, 0xebe9ce5f, "045f0a2dba608527e9b092a47db3f15f2b5ed304"),
                ],
            ),
        ],
    },
    Game {
        id: "nitd",
        parent: None,
        name: "Nightmare in the Dark",
        manufacturer: "Eleven / Gavaking",
        year: 2000,
        genre: Genre::Action,
        screenshot: 115,
        recipe: Recipe::Cmc42 { xor: 0xff },
        areas: [
            area(
                0x80000,
                &[
                    rom("309-p1.p1", 0x80000, 0xc840f884, "b72613bda9a276fdc8f2e9f542a98abe70e03f2e"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("309-m1.m1", 0x80000, 0x17ee25a8, "2232da840dd2ec15eb221ae65252afa163baf4f5"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("309-v1.v1", 0x400000, 0x93d32cd4, "c8ac53f99280c6dc8405cbea5a3d0d2301b0de5d"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("309-c1.c1", 0x800000, 0x4f9c2975, "0f15deada35eb10b6555cecc5f92730041e7cf00"),
                    rom("309-c2.c2", 0x800000, 0x8305083a, "22cbe533b11ca6bdfdd62cdb64296d6f9022887c"),
                ],
            ),
        ],
    },
    Game {
        id: "zupapa",
        parent: None,
        name: "Zupapa!",
        manufacturer: "SNK",
        year: 2001,
        genre: Genre::Action,
        screenshot: 184,
        recipe: Recipe::Cmc42 { xor: 0xbd },
        areas: [
            area(
                0x100000,
                &[
                    rom("070-p1.p1", 0x100000, 0x302dc61b, "682051ea527f313ca8eb965e51e2f9eb9965f915"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("070-m1.m1", 0x80000, 0x9696608c, "294f6658845dbf458c1f7a23684ee6662a71f023"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("070-v1.v1", 0x400000, 0x5eccca16, "5347311bf151812ace6b622dc50253af000b453b"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("070-c1.c1", 0x800000, 0x45f11579, "1969aa2c4726d36718649d5e1a11c7f6ab08d226"),
                    rom("070-c2.c2", 0x800000, 0xaa3856fd, "a7dedb00bf34305043815c0a5737706a635b13a3"),
                ],
            ),
        ],
    },
    Game {
        id: "ganryu",
        parent: None,
        name: "Ganryu / Musashi Ganryuki",
        manufacturer: "Visco",
        year: 1999,
        genre: Genre::Action,
        screenshot: 37,
        recipe: Recipe::Cmc42 { xor: 0x07 },
        areas: [
            area(
                0x200000,
                &[
                    rom("252-p1.p1", 0x200000, 0x7f07f4a6, "e850818ab84f49edab0b69fbec98084465cafa9d"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("252-m1.m1", 0x80000, 0x4757acd6, "211e75ae13a1c5887c6b5cb9b611b7ea0d5ed4da"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("252-v1.v1", 0x400000, 0x922656d0, "9a05f023fe6488b237e34be39302875612959c40"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("252-c1.c1", 0x800000, 0x1c66b764, "87d7b13bf47de8345ffed39b487448f12e5ad750"),
                    rom("252-c2.c2", 0x800000, 0xa99215a7, "5949fa48d7ef35b1f8ca44217ec73103c84dbd7f"),
                ],
            ),
        ],
    },
    Game {
        id: "bangbead",
        parent: None,
        name: "Bang Bead",
        manufacturer: "Visco",
        year: 2000,
        genre: Genre::Sports,
        screenshot: 9,
        recipe: Recipe::Cmc42 { xor: 0xf8 },
        areas: [
            area(
                0x200000,
                &[
                    rom("259-p1.p1", 0x200000, 0xe45fb36e, "634a23f91d7e4b8f7da1e0225c4efe0feed58491"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("259-m1.m1", 0x80000, 0x486886f9, "80d14615b7ad66b6e40c214be92239e847d38955"),
                ],
            ),
            area(
                0x500000,
                &[
                    rom("259-v1.v1", 0x400000, 0xe14f0136, "f5f9e8e5fe1a53e75868b8e9575f671d540cb7d3"),
                    rom("259-v2.v2", 0x100000, 0xc2263f1f, "9c734465e8f2084adbfa74bbb441af92ee00e5bb"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("259-c1.c1", 0x800000, 0xee798c90, "c3b243b6d6b068b41e438ee9ba9a63d9fcdef989"),
                    rom("259-c2.c2", 0x800000, 0xc23ba991, "28bdb6382900fe9b615254e2565bc1e5ae6c728d"),
                ],
            ),
        ],
    },
    Game {
        id: "s1945p",
        parent: None,
        name: "Strikers 1945 Plus",
        manufacturer: "Psikyo",
        year: 1999,
        genre: Genre::Shooter,
        screenshot: 138,
        recipe: Recipe::Cmc42 { xor: 0x05 },
        areas: [
            area(
                0x500000,
                &[
                    rom("254-p1.p1", 0x100000, 0x8eb4c50f, "99820fc641d25d514ac31d715f9daf1662656004"),
                    rom("254-p2.sp2", 0x400000, 0xfb4d01d5, "d5f6e3b72f2792517bc96f11654201771b0cf378"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("254-m1.m1", 0x80000, 0xfa95e454, "6f579853ed9634e93d59b8f749d74ddc44405f49"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("254-v1.v1", 0x800000, 0x36eef6ec, "e86d76e045652041144f72058cb08923bf59e5eb"),
                    rom("254-v2.v2", 0x800000, 0x523eae76, "287b4efb30a2a878c6fe31dc16059e7cb1453e1c"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("254-c1.c1", 0x800000, 0x4023de03, "0827fea982fe1c68c38cab2d5736b720cc57663b"),
                    rom("254-c2.c2", 0x800000, 0x6e269f1d, "eef0bc59d0931e98b5a1e24905caa148b45b4bae"),
                    rom("254-c3.c3", 0x800000, 0x72efc802, "b9507f0fbb9f50bc0afe85c30b89a36c87aba76b"),
                    rom("254-c4.c4", 0x800000, 0x2350f129, "1d12f2076600024a7da08aec64d845858dd798ac"),
                ],
            ),
        ],
    },
    Game {
        id: "preisle2",
        parent: None,
        name: "Prehistoric Isle 2",
        manufacturer: "Yumekobo",
        year: 1999,
        genre: Genre::Shooter,
        screenshot: 124,
        recipe: Recipe::Cmc42 { xor: 0x9f },
        areas: [
            area(
                0x500000,
                &[
                    rom("255-p1.p1", 0x100000, 0xd1e05a9c, "25b276acb6d85e79a250055eab0bb0682bdc5c65"),
                    rom("255-p2.sp2", 0x400000, 0xe926b3b1, "4a457f82be4619f80826132291da2668f46dd8cb"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("255-m1.m1", 0x80000, 0x54791895, "48dcaa8e466babdeeb5b8d498733b0a8aa4388e1"),
                ],
            ),
            area(
                0x800000,
                &[
                    rom("255-v1.v1", 0x800000, 0x7f224281, "1f4b0032b2f221e675ef690a1155971e0ebd4357"),
                ],
            ),
            none(),
            area(
                0x3000000,
                &[
                    rom("255-c1.c1", 0x800000, 0x815b3280, "017e058aada28ce65f7bcc80f38fb78f0b540bef"),
                    rom("255-c2.c2", 0x800000, 0x7836d9f5, "663f73a4eda41d57d761ef949f70ac429225bdc9"),
                    rom("255-c3.c3", 0x800000, 0x090ce222, "1d39fbcec5778a8b3191995395d05314ebd04584"),
                    rom("255-c4.c4", 0x800000, 0x5a78dfb5, "2e462f43f0edc7bc2ff75db2b5efea14bcadd81e"),
                    rom("255-c5.c5", 0x800000, 0x3bc8bfd1, "da1eeb63bd905ca5ec77c0394f2fe1f88e1bdb8d"),
                    rom("255-c6.c6", 0x800000, 0x05969b2c, "db4dbe0147190974352018aaf27aa724b0dfa79c"),
                ],
            ),
        ],
    },
    Game {
        id: "sengoku3",
        parent: None,
        name: "Sengoku 3 / Sengoku Densho 2001",
        manufacturer: "Noise Factory",
        year: 2001,
        genre: Genre::BeatEmUp,
        screenshot: 150,
        recipe: Recipe::Cmc42 { xor: 0xfe },
        areas: [
            area(
                0x200000,
                &[
                    rom("261-p1.p1", 0x200000, 0x31952e25, "13938486fab0754412fd32684cd5e255a7671a14"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("261-m1.m1", 0x80000, 0x893dc82a, "5504ec05fd536754556f030b848797873f127daa"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("261-v1.v1", 0x800000, 0x0e4e829a, "e720dec89a22e5495c2f1daed7dd594b09b18ee6"),
                    rom("261-v2.v2", 0x800000, 0xceb9b80b, "3a9e509bb56fe3c0cad4544c5716ff3a1f22f6c3"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("261-c1.c1", 0x800000, 0x5567da28, "19c002fa7e6ded26fc49b2e05228f5643f878cc0"),
                    rom("261-c2.c2", 0x800000, 0xfdeda11e, "f5da9a1cb9112f3619209c2d9e43f66afba0839b"),
                    rom("261-c3.c3", 0x800000, 0xacb7db5e, "9f5bb1163840d039dfc5b59306dc769dc7db33ba"),
                    rom("261-c4.c4", 0x800000, 0x50602e32, "9ca39a27c207e85c8da398cac79eae4a01c50c42"),
                ],
            ),
        ],
    },
    Game {
        id: "sengoku3a",
        parent: Some("sengoku3"),
        name: "Sengoku 3 (set 2)",
        manufacturer: "Noise Factory",
        year: 2001,
        genre: Genre::BeatEmUp,
        screenshot: 150,
        recipe: Recipe::Cmc42 { xor: 0xfe },
        areas: [
            area(
                0x200000,
                &[
                    rom("261-ph1.p1", 0x200000, 0x1a9ba690, "36c2bee8f3c673a040f6d1b27d6810b12e5e19da"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("261-m1.m1", 0x80000, 0xd1e12062, "fa4a0934b861b6eedcda13da7f7da15656b30e51"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("261-v1.v1", 0x800000, 0xa82cd784, "efbf547cc7c86a86ba8af0fba2ccf4cd39f6569a"),
                    rom("261-v2.v2", 0x800000, 0x293a07ae, "4b7b94e98f474658c82557426e01f75d392bb06b"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("261-c1.c1", 0x800000, 0x290236ca, "830e4fea1d33c56eb8426d5d81b48824c0502620"),
                    rom("261-c2.c2", 0x800000, 0xe99ffe2f, "52f7a4f7a7729319977e290cb42bfc9bfcd20585"),
                    rom("261-c3.c3", 0x800000, 0x75521785, "5604e7594a6ba588cec4945706c2779c158d4573"),
                    rom("261-c4.c4", 0x800000, 0x7cdfd30e, "15635d2ac98b673932361b75c36de6e7a3d5efbb"),
                ],
            ),
        ],
    },
    Game {
        id: "kof99ka",
        parent: Some("kof99"),
        name: "The King of Fighters '99 (alt)",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 75,
        recipe: Recipe::Cmc42 { xor: 0x00 },
        areas: [
            area(
                0x500000,
                &[
                    rom("251-p1.p1", 0x100000, 0xa0f635ab, "6b5f88b18f20f0f17d78f3a81890098087b8b2de"),
                    rom("251-p2.p2", 0x400000, 0x2ef809d2, "8bac385fa2d24d1bd298cd48a29f4dcc0499509c"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("251-m1.m1", 0x80000, 0x93656e13, "bb16296148250f15abedab060430c2ab2b5ec977"),
                ],
            ),
            area(
                0xe00000,
                &[
                    rom("251-v1.v1", 0x400000, 0x23802bf6, "f0b6cb0ef3db0896f36905fc11cf2105921311a0"),
                    rom("251-v2.v2", 0x400000, 0x76561594, "67356c98d3ae7cd38424cf6e66a54b26aab6f829"),
                    rom("251-v3.v3", 0x400000, 0xc303e00c, "d5623a682a869c6669913c41d555b85cc381b274"),
                    rom("251-v4.v4", 0x200000, 0x7346fdd5, "686134a0141fac9482006ae7a23262e8672c83cc"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("251-c1.c1", 0x800000, 0x18d9bb28, "580a26ee1560ccfeac7ba49160644ca47b64f1f6"),
                    rom("251-c2.c2", 0x800000, 0x32da435a, "750cd72e9b69bbdf64383fa324a4127a8a17565b"),
                    rom("251-c3.c3", 0x800000, 0xf98e8532, "ca6da33106f9982fc94a6d3aa7e67227e26f1b35"),
                    rom("251-c4.c4", 0x800000, 0xaa0940ee, "b30f34c447509b93864f6be9e3b7273661dd20c1"),
                    rom("251-c5.c5", 0x800000, 0x86ee40ba, "9d39ad8b15c34af28752d4f7b776ce8b45c6709e"),
                    rom("251-c6.c6", 0x800000, 0x8c720306, "dfaa88dfdf0560c2d287b6414c7e1c2f9a8b8ed3"),
                    rom("251-c7.c7", 0x800000, 0x1928dd00, "d2f0527098c68f676cf27bd0214787fd8c20932a"),
                    rom("251-c8.c8", 0x800000, 0xb937392b, "8a47cbecb8fb97b521f9161a409c349b1e89a872"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug3h",
        parent: Some("mslug3"),
        name: "Metal Slug 3 (NGH-2560)",
        manufacturer: "SNK",
        year: 2000,
        genre: Genre::Action,
        screenshot: 101,
        recipe: Recipe::Cmc42 { xor: 0xad },
        areas: [
            area(
                0x500000,
                &[
                    rom("256-ph1.p1", 0x100000, 0xe024d240, "139ff1b939335e043cc482e83b4cabad68bf92df"),
                    rom("256-ph2.sp2", 0x400000, 0xa4d2e094, "8f81e047020fc3a1a1c1b8a7b20b7195174b928d"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("256-m1.m1", 0x80000, 0x69bce0c5, "b7ac39fba13b40cbb0163304d591a7f8c2309ca4"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("256-v1.v1", 0x400000, 0xe5dc9edf, "8d62bcb1f2512b2025a8764cd850da0fe2630eac"),
                    rom("256-v2.v2", 0x400000, 0x3c66fe1b, "e568a9f4cd6dad32fda16163b6a4177e26b6e6a8"),
                    rom("256-v3.v3", 0x400000, 0xb9ee9d24, "7aa6a13f659f0d15f103b74e88059992b77fb5e4"),
                    rom("256-v4.v4", 0x400000, 0x7eb31ab0, "35f55fd6eb3b3693cd70730fbad2ae9f952e521e"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("256-c1.c1", 0x800000, 0xda670d4e, "d1b6a8419d7febe4eb3faa99e118ac648d6df98f"),
                    rom("256-c2.c2", 0x800000, 0x7f8e5730, "cf39993558dee4d567c09b54bbcbc136f5b3d008"),
                    rom("256-c3.c3", 0x800000, 0x89dba052, "18bd304524cf7e0d66afb9ac65cc40bed1e8e473"),
                    rom("256-c4.c4", 0x800000, 0x2158993e, "eb6c6a073ffb8bff6671e773c1cbff96ca7ed89f"),
                    rom("256-c5.c5", 0x800000, 0xc65bdf86, "aade24b22246cf27fcfc31e0c12993aa15a0412c"),
                    rom("256-c6.c6", 0x800000, 0x40164cb9, "423e27096c097b011910fe8d89295c091c4776e3"),
                    rom("256-c7.c7", 0x800000, 0xd42fe62e, "86711dfa1568a0c92288051eadf4aee3b8f8b625"),
                    rom("256-c8.c8", 0x800000, 0x2c1a30e6, "03a70f853bf8cb9bf8f004fd64e87b0a91ad86ee"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2000n",
        parent: Some("kof2000"),
        name: "The King of Fighters 2000",
        manufacturer: "SNK",
        year: 2000,
        genre: Genre::Fighting,
        screenshot: 63,
        recipe: Recipe::Cmc50 { xor: 0x00 },
        areas: [
            area(
                0x500000,
                &[
                    rom("257-pn1.p1", 0x100000, 0x1eadc385, "ecaaa3f13319a9d1043b80b043c97b7cbf762c5f"),
                    rom("257-pn2.sp2", 0x400000, 0x2420298d, "0fed2b7b94464483bf3c3199bea6f135004a43b2"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("257-m1.m1", 0x80000, 0x2392d5ae, "5c48c8f269abf0bdd17926f1d7f6d1dd70faf41d"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("257-v1.v1", 0x400000, 0x32e8c6df, "32588818cf79e4d6a2c931cdbf2f74a3c89fb71c"),
                    rom("257-v2.v2", 0x400000, 0x0d2a22e4, "de4a3d5126201af22c310f270a43aa6c0ca19064"),
                    rom("257-v3.v3", 0x400000, 0x8745ad72, "82a0de3098cb4f44679a969c1b086a169a4aff98"),
                    rom("257-v4.v4", 0x400000, 0xfa18b35d, "8bc0a1972bc51659e5848ecb9394bb3b2b1e2794"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("257-c1.c1", 0x800000, 0xd426e50d, "150db285c2602c04a146500cbda5ecee2878e5ad"),
                    rom("257-c2.c2", 0x800000, 0x8ca43381, "4f30216b191ded2cf3cb87ddb1461e77959e2c8d"),
                    rom("257-c3.c3", 0x800000, 0xb3aa0614, "2551501006368426beeb4d5b7b0912de103a1990"),
                    rom("257-c4.c4", 0x800000, 0x02249ab7, "1d6f773bb7e0fbc193c277bb1f108d548aa77af2"),
                    rom("257-c5.c5", 0x800000, 0xeec7144c, "366d6746df4dd48ba55edf45697e6a82aafddbc9"),
                    rom("257-c6.c6", 0x800000, 0x4c3eaa05, "4e040a2d644a4610168e61881450bf767a5cd647"),
                    rom("257-c7.c7", 0x800000, 0x7ec3998e, "aba3a0884110b7affe7e5bc07b3acb92c373644e"),
                    rom("257-c8.c8", 0x800000, 0x9c85cf66, "7667cb62a55623d8bc0385b4424867b5ce32ea9a"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2001",
        parent: None,
        name: "The King of Fighters 2001",
        manufacturer: "Eolith / SNK",
        year: 2001,
        genre: Genre::Fighting,
        screenshot: 64,
        recipe: Recipe::Cmc50 { xor: 0x1e },
        areas: [
            area(
                0x500000,
                &[
                    rom("262-p1-08-e0.p1", 0x100000, 0x31a761ed, "66ec5d3e325e63d7a4950e5ce61636ac7c9eaf49"),
                    rom("262-p2-08-e0.sp2", 0x400000, 0xfdef036d, "61e2c232344c8cf7f466f8ffa6913a93c3a729e5"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("262-m1.m1", 0x80000, 0x5a158c74, "6a330417f284203a88561c3aed562ca7a0c97230"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("262-v1-08-e0.v1", 0x400000, 0x6a232d84, "b12c9b780b73ebe3c3dba41ab4cb9d973b7f643e"),
                    rom("262-v2-08-e0.v2", 0x400000, 0xced2c583, "789718bfe706890d4c94a6a4925d6c14cfffdd21"),
                    rom("262-v3-08-e0.v3", 0x400000, 0xb0b936d9, "18fd6637598d081074ac43ae9478c87a3b357ae0"),
                    rom("262-v4-08-e0.v4", 0x400000, 0x9bfc1494, "8ed52c9dcafa16fa6a83a3cf69304b07fc47c304"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("262-c1.c1", 0x800000, 0x66571f48, "f80e0dc6069a347b0068437a09dee80a477f6cab"),
                    rom("262-c2.c2", 0x800000, 0x9ad30902, "4bfc70a1a587fab3e8781400c6c84b736164e734"),
                    rom("262-c3.c3", 0x800000, 0x63d7cbbf, "d92480669d969edd500bd5afaa485169ed6ab6d2"),
                    rom("262-c4.c4", 0x800000, 0x40184211, "192faa60a17abadd21bfbb12b43eb982ee71702e"),
                    rom("262-c5.c5", 0x800000, 0x600d9112, "5b552e46ab7d6ad21ac54e1767ab70fcf8f1c9e7"),
                    rom("262-c6.c6", 0x800000, 0x320c3deb, "8a5d39ddfe492497d65ac72a314d08b181af9a19"),
                    rom("262-c7.c7", 0x800000, 0x707c084a, "c08b9c9d8cd7af8ce3fae84263846606cf4fce63"),
                    rom("262-c8.c8", 0x800000, 0x05cc0966, "8e894a92e81f37d599d6e5c6f84fe901ee3da5af"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2001h",
        parent: Some("kof2001"),
        name: "The King of Fighters 2001 (alt)",
        manufacturer: "Eolith / SNK",
        year: 2001,
        genre: Genre::Fighting,
        screenshot: 64,
        recipe: Recipe::Cmc50 { xor: 0x1e },
        areas: [
            area(
                0x500000,
                &[
                    rom("262-pg1.p1", 0x100000, 0x0036fd7d, "a6720b88b3e615b7406954548a47b88c4c8bf4f1"),
                    rom("262-pg2.sp2", 0x400000, 0x46d9d159, "63f92d10589ac943d0bc3ab28204e4ca3aac69b7"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("262-m1.m1", 0x80000, 0xd0622192, "edb7714c38b3f0c676c00ba1d184f7d2d5da2696"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("262-v1-08-e0.v1", 0x400000, 0xc3d754d1, "7eeebd4ee9e573ea58a5cdd52228f857b8b6668f"),
                    rom("262-v2-08-e0.v2", 0x400000, 0xf36a322f, "3d3639eda7494c4544e93f7aa4ae906fd1ad8cad"),
                    rom("262-v3-08-e0.v3", 0x400000, 0x522f93a7, "ceae7fd8867257c1ac7534bbaa7dbfa6047c1cb2"),
                    rom("262-v4-08-e0.v4", 0x400000, 0x7b3123e3, "940e4fe87902f366e0f66e07497be9c3575d1e2d"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("262-c1.c1", 0x800000, 0xd248dce4, "9b1174f4b69d671b287667aa056fd2cbc0b322f8"),
                    rom("262-c2.c2", 0x800000, 0x699b3f57, "704f9c608a4de79968299f0df271c8c459efc053"),
                    rom("262-c3.c3", 0x800000, 0x7085a295, "8640a57f6d42078ccc0270375c9ff487886c93a6"),
                    rom("262-c4.c4", 0x800000, 0xb1a8d39d, "318226e4cdd22200da7b72dafcd2ff07c879574c"),
                    rom("262-c5.c5", 0x800000, 0x6e0bdc2c, "d5b32a68e7fecc8747528655874296f3bb0e7b14"),
                    rom("262-c6.c6", 0x800000, 0x0b0fc2fd, "70de0060e15bc4915b3e237b960ca59d10826a64"),
                    rom("262-c7.c7", 0x800000, 0xc0149b7e, "737a456db593869817fdbe80e4567266d0169424"),
                    rom("262-c8.c8", 0x800000, 0x65a200f7, "cc41a1d23519470594407e90e3141ecb4053b8e1"),
                ],
            ),
        ],
    },
    Game {
        id: "jockeygp",
        parent: None,
        name: "Jockey Grand Prix",
        manufacturer: "BrezzaSoft",
        year: 2001,
        genre: Genre::Sports,
        screenshot: 48,
        recipe: Recipe::Cmc50 { xor: 0xac },
        areas: [
            area(
                0x100000,
                &[
                    rom("008-epr.p1", 0x100000, 0xd541b7e7, "9dd4e6214bf82920473b38c0d288264ccef2c91f"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("008-m1.m1", 0x80000, 0x897d70ba, "af0c47847f824a10ab9c274115cf1fece06fb0d5"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("008-v1.v1", 0x200000, 0xdd009c09, "6a881dc05f2013884904b3fe2069ae8d90ffd734"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("008-c1.c1", 0x800000, 0x9408f94d, "3a5d5f6a986d274f23ba5ef7c098e7833ea81567"),
                    rom("008-c2.c2", 0x800000, 0x3b4cd9b3, "4b4ce39fcd529922c86fe75720b8853b9a6dac69"),
                ],
            ),
        ],
    },
    Game {
        id: "jockeygpa",
        parent: Some("jockeygp"),
        name: "Jockey Grand Prix (set 2)",
        manufacturer: "BrezzaSoft",
        year: 2001,
        genre: Genre::Sports,
        screenshot: 48,
        recipe: Recipe::Cmc50 { xor: 0xac },
        areas: [
            area(
                0x100000,
                &[
                    rom("008-epr_a.p1", 0x100000, 0x201e6a36, "b99ea752470e1bf8fb64fac01b19681faee4453b"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("008-m1.m1", 0x80000, 0x24bb2714, "0f38d2fc9323c7166e6fec58566d19eba6514cdb"),
                ],
            ),
            area(
                0x200000,
                &[
                    rom("008-v1.v1", 0x200000, 0x240d6ccb, "712d456a5d24133501848c948412cc9606f52c7f"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("008-c1.c1", 0x800000, 0xdc82ffb3, "8b2ffd812d70203162029374a030598d46c09735"),
                    rom("008-c2.c2", 0x800000, 0x5815f6fe, "b50c13c8d4050d7198c19eaabc1d25123e0ed60f"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug4",
        parent: None,
        name: "Metal Slug 4",
        manufacturer: "Mega / Playmore",
        year: 2002,
        genre: Genre::Action,
        screenshot: 103,
        recipe: Recipe::Pcm2 { xor: 0x31, value: 8, decrypt_sfix: true },
        areas: [
            area(
                0x500000,
                &[
                    rom("263-p1.p1", 0x100000, 0xe58f2aae, "ee4b71043e4d286cb584abcafaf342bc807999db"),
                    rom("263-p2.sp2", 0x400000, 0xfedc2734, "adf62a5c7567129e5722a6051e4e96b1190a7ab4"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("263-m1.m1", 0x80000, 0x2c201a01, "fe97f18ee3e6a334120b8d2a58266ca0d8850957"),
                ],
            ),
            area(
                0xc00000,
                &[
                    rom("263-v1.v1", 0x800000, 0x00c6a0dc, "4c89b41ecaebd80d1f5c42fa60f18af0fb8c01ce"),
                    rom("263-v2.v2", 0x400000, 0x5b5f1b82, "f260674038992ba015e3431dd30a8174ba87e912"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("263-c1.c1", 0x800000, 0xbd1b2533, "9c14af04a93a83a9d706c47ff795b74b4d7cd42d"),
                    rom("263-c2.c2", 0x800000, 0x5ab267cd, "6be8a8a1bb7cc2157fccb4068a57390203ff5e86"),
                    rom("263-c3.c3", 0x800000, 0xa5100723, "7c8d38060c9d9b5dd4c4c6bb8f394ea0f2e06816"),
                    rom("263-c4.c4", 0x800000, 0xe217a4d7, "6491dc4c6f9c991ba6b33a310ddcbdcb4648af90"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug4h",
        parent: Some("mslug4"),
        name: "Metal Slug 4 (NGH-2630)",
        manufacturer: "Mega / Playmore",
        year: 2002,
        genre: Genre::Action,
        screenshot: 103,
        recipe: Recipe::Pcm2 { xor: 0x31, value: 8, decrypt_sfix: true },
        areas: [
            area(
                0x500000,
                &[
                    rom("263-ph1.p1", 0x100000, 0xd6534157, "6681c9e94ab13d2c70616223efac0c88026f9f81"),
                    rom("263-ph2.sp2", 0x400000, 0x8d7aa9eb, "3014e04117c712f929e7fda2241dce8c8fc510cc"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("263-m1.m1", 0x80000, 0xea13a70c, "d2269d912c19c4df2ed6490849f5144d4680ce53"),
                ],
            ),
            area(
                0xc00000,
                &[
                    rom("263-v1.v1", 0x800000, 0x4cfa0689, "48f8fa10b550d6601480a3fc8cc291ed0844a3db"),
                    rom("263-v2.v2", 0x400000, 0xfc93d7b7, "71da25282420234f9d0ef6743eecc96724ecafd7"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("263-c1.c1", 0x800000, 0xd440c278, "f82c596f838905549a3e0a0dece1f405b71a020f"),
                    rom("263-c2.c2", 0x800000, 0xe581bd3f, "8425b93d7b48e11086057385de4204e30527ffcc"),
                    rom("263-c3.c3", 0x800000, 0x390b1d35, "f6060bc96d46f120bc114c5cded95d342a066b20"),
                    rom("263-c4.c4", 0x800000, 0x05475ee2, "346c347e7ae20e08c66254a9c8311a6fa40b7f96"),
                ],
            ),
        ],
    },
    Game {
        id: "rotd",
        parent: None,
        name: "Rage of the Dragons",
        manufacturer: "Evoga / Playmore",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 137,
        recipe: Recipe::Pcm2 { xor: 0x3f, value: 16, decrypt_sfix: true },
        areas: [
            area(
                0x800000,
                &[
                    rom("264-p1.p1", 0x800000, 0x6ad74aca, "38fb3fa625d3146be0c51d866f8297337b981976"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("264-m1.m1", 0x80000, 0xb1cdc30d, "f40530e745098464f255f2476f79419789fc5fe3"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("264-v1.v1", 0x800000, 0x01f5bbee, "db7e18318cfc640cd07afb1770ce17bca96ce69b"),
                    rom("264-v2.v2", 0x800000, 0xe5f24c4c, "19f27cddef347c328728366311adaa4fdcb09e7a"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("264-c1.c1", 0x800000, 0xfd646f13, "a19564d842dcdbea5954f105a654755c45789d31"),
                    rom("264-c2.c2", 0x800000, 0x44419b15, "60cf0245c60c92e9555cdbb7c2da321b7d380745"),
                    rom("264-c3.c3", 0x800000, 0xa2aafd19, "81b343cbc3167672eadbbdc5038e1f3728725402"),
                    rom("264-c4.c4", 0x800000, 0xf4afdcc8, "3490b3b4e8da68cb5aefd8881cacdb40e9f7b324"),
                ],
            ),
        ],
    },
    Game {
        id: "rotdh",
        parent: Some("rotd"),
        name: "Rage of the Dragons (NGH-2640)",
        manufacturer: "Evoga / Playmore",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 137,
        recipe: Recipe::Pcm2 { xor: 0x3f, value: 16, decrypt_sfix: true },
        areas: [
            area(
                0x800000,
                &[
                    rom("264-p1k.p1", 0x800000, 0x27a425ad, "7211ca1b5c5a1d69f369758e958fb95c368f6029"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("264-m1.m1", 0x80000, 0xd910a536, "4d316365baf591f942378db6387dd13d34328ae0"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("264-v1.v1", 0x800000, 0xb41eccbb, "eb0b0c0d5dc01f43d596531325f2c08433061261"),
                    rom("264-v2.v2", 0x800000, 0x1f0b58b7, "fa02bef252a224fd9fd927211e653777a94d2afe"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("264-c1.c1", 0x800000, 0xc1811cb4, "c6bd9049082afe79eb169f3a6240586db54d2efb"),
                    rom("264-c2.c2", 0x800000, 0x3e53225d, "a229931d7933e636440f9f22f824063b7be358db"),
                    rom("264-c3.c3", 0x800000, 0x4e8dacd5, "b6f4543329726aa89fc66d94f1d26e3af7983b48"),
                    rom("264-c4.c4", 0x800000, 0xbb670f41, "6729c14790b3bddf5a72f05132964d252cce94a5"),
                ],
            ),
        ],
    },
    Game {
        id: "pnyaa",
        parent: None,
        name: "Pochi and Nyaa",
        manufacturer: "Aiky / Taito",
        year: 2003,
        genre: Genre::Puzzle,
        screenshot: 122,
        recipe: Recipe::Pcm2 { xor: 0x2e, value: 4, decrypt_sfix: true },
        areas: [
            area(
                0x100000,
                &[
                    rom("267-p1.p1", 0x100000, 0x9ff26733, "5bd6023052d88a2779ef44639116409994781e76"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("267-m1.m1", 0x80000, 0xed2692c4, "a4b26897869ca5a4b915c7dbad9b251bac47f32c"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("267-v1.v1", 0x400000, 0x1e411024, "63ebd60191e8e0a8aead1c4f60cf3afa72362dca"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("267-c1.c1", 0x800000, 0xfc22ab1a, "95a8777c2d29e32ab2a4bbc6e5400bec58d02314"),
                    rom("267-c2.c2", 0x800000, 0x0ef067f5, "30892587fc80e2c99cfe99cbe2f750514b72cfd2"),
                ],
            ),
        ],
    },
    Game {
        id: "pnyaaa",
        parent: Some("pnyaa"),
        name: "Pochi and Nyaa (set 2)",
        manufacturer: "Aiky / Taito",
        year: 2003,
        genre: Genre::Puzzle,
        screenshot: 122,
        recipe: Recipe::Pcm2 { xor: 0x2e, value: 4, decrypt_sfix: true },
        areas: [
            area(
                0x100000,
                &[
                    rom("267-p1a.p1", 0x100000, 0x3f9a9dc5, "262aa09f0e2308758c1e1eea7d3036af69014c86"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("267-m1.m1", 0x80000, 0xf3cd6dba, "4cd218b26205e064c4501e4d62c51ad2bb4e2129"),
                ],
            ),
            area(
                0x400000,
                &[
                    rom("267-v1.v1", 0x400000, 0x9eba97c0, "20f0d394647c5343c7336eef2ac2fa549e587dd7"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("267-c1.c1", 0x800000, 0xbd81934b, "6f1d32b79802eda66ec143be77480a2ddd5873b7"),
                    rom("267-c2.c2", 0x800000, 0xe46dd532, "a4db49b8109734eb0a178fa31cfa7a7407b75dc1"),
                ],
            ),
        ],
    },
    Game {
        id: "ms4plus",
        parent: Some("mslug4"),
        name: "Metal Slug 4 Plus (bootleg)",
        manufacturer: "bootleg",
        year: 2002,
        genre: Genre::Action,
        screenshot: 97,
        recipe: Recipe::Pcm2 { xor: 0x31, value: 8, decrypt_sfix: false },
        areas: [
            area(
                0x500000,
                &[
                    rom("ms4-p1p.bin", 0x100000, 0x415fcc5d, "59065603a20d084008b05403fe9a9b739a366801"),
                    rom("263-p2.sp2", 0x400000, 0xcaf2df0f, "9f55c7adaebf2a7019f6527ce210a7af4c861253"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("ms4-s1p.bin", 0x20000, 0x042aa1b8, "8df196df0a8abbc8608b1023ed4b0ddffe263922"),
                ],
            ),
            area(
                0x80000,
                &[
                    rom("263-m1.m1", 0x80000, 0x9098e060, "967e73a66696f09303678b1dda448fac191ef416"),
                ],
            ),
            area(
                0xc00000,
                &[
                    rom("263-v1.v1", 0x800000, 0x51b8ff64, "1c1a96cf6367a6c4512549a00ebe8dddfe8aa375"),
                    rom("263-v2.v2", 0x400000, 0xf2144418, "914c336b8a578f96b0bcddde8cb16ecdb03a34fd"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("263-c1.c1", 0x800000, 0xa148fce2, "072071ef5f780ce2dfb81b4246f8973f8f140b62"),
                    rom("263-c2.c2", 0x800000, 0xc0e21a91, "7c969e6870481c698d8af6d1af2e96e5f09813d3"),
                    rom("263-c3.c3", 0x800000, 0xafe18572, "16295be9bc20ed5297316086d5609e66eb5ebd5d"),
                    rom("263-c4.c4", 0x800000, 0xd2a7e7e0, "1eb10270a8e9591249f3d75634a8bf5065670840"),
                ],
            ),
        ],
    },
    Game {
        id: "kof99",
        parent: None,
        name: "The King of Fighters '99",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 75,
        recipe: Recipe::Sma(&sma::KOF99),
        areas: [
            area(
                0x840000,
                &[
                    rom("ka002.neo-sma", 0x40000, 0xf0543810, "367c04ab862d93c3b4732c95ce726fbb7e718306"),
                    rom("251-p1.p1", 0x400000, 0x5e52396c, "06a93c8043cf868560af47a8f58cad1df2ad5158"),
                    rom("251-p2.p2", 0x400000, 0xada6e437, "1900a4bead115eb45ffbe83b78e2831cf02d55a5"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("251-m1.m1", 0x80000, 0x7aaff9d1, "7564f04db55625f1f4d77fdd15a944c9d29a59dc"),
                ],
            ),
            area(
                0xe00000,
                &[
                    rom("251-v1.v1", 0x400000, 0xfd919016, "2f7c0018cc123fd71807ab0899b1d4bba9e99b2c"),
                    rom("251-v2.v2", 0x400000, 0x75140c63, "4e968f72f06043f2245724af95c64efcf559f488"),
                    rom("251-v3.v3", 0x400000, 0xd571d39f, "0e6890a262e133a49d37a510e062c453a406d679"),
                    rom("251-v4.v4", 0x200000, 0x0b3081ea, "3a74a942aa51692dd1bb379ab7ab4a1635345d1d"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("251-c1.c1", 0x800000, 0xfb5fb61c, "3c28ac5ea17071fc2dfb8c8218ddfa5b8d7a7256"),
                    rom("251-c2.c2", 0x800000, 0xe82f8828, "62ea38cc6836b327318a95a3d2d9b5fdf9b9add8"),
                    rom("251-c3.c3", 0x800000, 0x57b80809, "7407d28a4f0a3636e69f13953b4c829efe8ff991"),
                    rom("251-c4.c4", 0x800000, 0x3823a5ac, "468d9123509fa0e1aaeea2c26118749e19206c82"),
                    rom("251-c5.c5", 0x800000, 0x560cbf30, "44d507bb0a332cc616075d08701575e3c0f9bdbf"),
                    rom("251-c6.c6", 0x800000, 0xbbc8da89, "93571e2f158e741e2380e914a50223f651271a91"),
                    rom("251-c7.c7", 0x800000, 0x626916ff, "5fd305b60576bc2c1bde0f75eeea57b411e10ad2"),
                    rom("251-c8.c8", 0x800000, 0x51cde258, "5fb5fe1114ace1b50e42257d131378e3c5dd3472"),
                ],
            ),
        ],
    },
    Game {
        id: "kof99e",
        parent: Some("kof99"),
        name: "The King of Fighters '99 (set 2)",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 75,
        recipe: Recipe::Sma(&sma::KOF99),
        areas: [
            area(
                0x840000,
                &[
                    rom("ka002.neo-sma", 0x40000, 0xd097eceb, "91c12706b2f4e1226221b13b5867e5c22c3143a3"),
                    rom("251-ep1.p1", 0x400000, 0x781545c1, "f3142ca9814dc2ea23ac8e61aea91c8e7733e49b"),
                    rom("251-ep2.p2", 0x400000, 0x9b83e81c, "07ea2cf2de094aae9e12c2f3fbf48ffc99fc2041"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("251-m1.m1", 0x80000, 0x7c2759cb, "740de0e014ae16022d341a9bfee179089be5b3aa"),
                ],
            ),
            area(
                0xe00000,
                &[
                    rom("251-v1.v1", 0x400000, 0x26b51c70, "54bb25514d5e426e62c9e8cf480167b7728591f4"),
                    rom("251-v2.v2", 0x400000, 0xfed1b582, "89088b022ca7b9463755c49104b5a48f6b1723a7"),
                    rom("251-v3.v3", 0x400000, 0xff246ff8, "f38f12e8c405fde6ebb782a8d6686f980db002af"),
                    rom("251-v4.v4", 0x200000, 0x91fba674, "3e6fb86e611e8369929b0c1206217ac8ab8df6b7"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("251-c1.c1", 0x800000, 0xf319591c, "da1788f11dbb46aa7376ce28d850d3238fac5035"),
                    rom("251-c2.c2", 0x800000, 0xc4682b51, "f039b856db061cb92a7437149f26881c003cec49"),
                    rom("251-c3.c3", 0x800000, 0x9ae8e802, "a4ec22df3a26cb83e5168432a11a0bc1931912c8"),
                    rom("251-c4.c4", 0x800000, 0xb20b5c29, "9afdbb03f09494cd16fbfbff7243ba93afa09887"),
                    rom("251-c5.c5", 0x800000, 0xe7395209, "127ec6771d39f20929da4399e65ad69def173e08"),
                    rom("251-c6.c6", 0x800000, 0x76282264, "0e7c5cce63c90d9df9b18b5032a260a5e741f910"),
                    rom("251-c7.c7", 0x800000, 0x1e1d5e63, "a02c8c9fe9bf55a7418334c5e65749f42d9ed8f2"),
                    rom("251-c8.c8", 0x800000, 0x958d1077, "652aa7fafd92830dc96d46cacfb1256a46a62e87"),
                ],
            ),
        ],
    },
    Game {
        id: "kof99h",
        parent: Some("kof99"),
        name: "The King of Fighters '99 (set 3)",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 75,
        recipe: Recipe::Sma(&sma::KOF99),
        areas: [
            area(
                0x840000,
                &[
                    rom("kc002.neo-sma", 0x40000, 0x4246805c, "6d726aeac1c6c58edf40d34ef88e5d9cb43983e5"),
                    rom("251-pg1.p1", 0x400000, 0x96606146, "f8b6bfa5a9922f0ff3e2729eacf004e66ecef4d6"),
                    rom("251-pg2.p2", 0x400000, 0x956dddb0, "f494856d0b43bb797eed56eac474c975d861412d"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("251-m1.m1", 0x80000, 0x0382aebb, "77608c045b2b1a8eec0189b0a633047e038c36d2"),
                ],
            ),
            area(
                0xe00000,
                &[
                    rom("251-v1.v1", 0x400000, 0x3cefab6b, "3be50d953b1d3970da63ae77d2366378e0926608"),
                    rom("251-v2.v2", 0x400000, 0x13909999, "a2fd49d196936100a0d7105fb6a3dca1e1b858c4"),
                    rom("251-v3.v3", 0x400000, 0x6bc2f226, "ca807bfcacaec4921627c27d3f4c2be41950e0ec"),
                    rom("251-v4.v4", 0x200000, 0xbadf0f0a, "6c8c57abfeafb0be0c5bc42a7b2c197b5b797a32"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("251-c1.c1", 0x800000, 0xc237e321, "70ea7fe460b6bd1aba889e40e9da81e51eba2a43"),
                    rom("251-c2.c2", 0x800000, 0x1e2de0c6, "49e6ffc6643894031aa503756da1fe976a27e941"),
                    rom("251-c3.c3", 0x800000, 0x11ec4e43, "78bdb3c529a8eefdb05b6f6c021840e490fd103e"),
                    rom("251-c4.c4", 0x800000, 0x76c66ceb, "0ccf5897e5bf5fa609f86a618703e13e6e854a91"),
                    rom("251-c5.c5", 0x800000, 0x83b05552, "52fe532ee68e1d0329dea9530f43b5441e60aa7e"),
                    rom("251-c6.c6", 0x800000, 0xfa8ac4ee, "24e58769fdb751037f1d991ba48666c330bfe255"),
                    rom("251-c7.c7", 0x800000, 0xd60beca4, "73b9fbc3e403ec8159bf0aa3a4ed2e3f68c03244"),
                    rom("251-c8.c8", 0x800000, 0xdd03c05f, "50f87d0867601888465e39de57018b106ce92ac1"),
                ],
            ),
        ],
    },
    Game {
        id: "kof99k",
        parent: Some("kof99"),
        name: "The King of Fighters '99 (Korea)",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 75,
        recipe: Recipe::Sma(&sma::KOF99),
        areas: [
            area(
                0x840000,
                &[
                    rom("kb002.neo-sma", 0x40000, 0x9d490f69, "36f4c83925d5d145970fffe768261b42caf60dbb"),
                    rom("251-pg1k.p1", 0x400000, 0x7544c84d, "d02703ee19e8e794610d689148842d4c20d1f816"),
                    rom("251-pg2k.p2", 0x400000, 0xe582eaed, "b6485fdc1680375a3c8845464dc704cf4ca05e68"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("251-m1.m1", 0x80000, 0xb3de5bbc, "2fd95e75989a88988806110646f43c9098e4b471"),
                ],
            ),
            area(
                0xe00000,
                &[
                    rom("251-v1.v1", 0x400000, 0xc39bcee1, "d37085fbe68289a5dd2f7f8ca97c0a6a6aa514ed"),
                    rom("251-v2.v2", 0x400000, 0xf294483c, "0475a5e98af3bcae77e8cf38a2e4cba72917575f"),
                    rom("251-v3.v3", 0x400000, 0xbee7b1a8, "4623c4a6d95d4e4178140181aac4f60e30ca7f16"),
                    rom("251-v4.v4", 0x200000, 0x0ce2d87e, "3d8c2b8c41be673a736d07159bb688279e17a816"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("251-c1.c1", 0x800000, 0x6f166e0b, "2f577f06dfea02028fa1c7348ba7be3b1b37f253"),
                    rom("251-c2.c2", 0x800000, 0xf81f83e0, "341750397e4e294093639c13aeadd2007c442048"),
                    rom("251-c3.c3", 0x800000, 0x7db4a093, "b36ef82cd78affa9f0b665923fb8e02e37cfb808"),
                    rom("251-c4.c4", 0x800000, 0xe75e3c1e, "4aacd28ca94a1cade23a84dd723d693e7a063502"),
                    rom("251-c5.c5", 0x800000, 0x70917d09, "7ee95c090cc349569d3eca6771c3bcbfdeb0d808"),
                    rom("251-c6.c6", 0x800000, 0x1de285fb, "88efd71d6b4ded040c69317fd189ec5730f7f00d"),
                    rom("251-c7.c7", 0x800000, 0x2cd2b8f6, "635f079761e00167295eb60dbb6c1ca9415d0ca3"),
                    rom("251-c8.c8", 0x800000, 0xf8f470cc, "94b1fb2ed13b6767bb789d60129d0e1e79eefbee"),
                ],
            ),
        ],
    },
    Game {
        id: "garou",
        parent: None,
        name: "Garou - Mark of the Wolves",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 38,
        recipe: Recipe::Sma(&sma::GAROU),
        areas: [
            area(
                0x840000,
                &[
                    rom("kf.neo-sma", 0x40000, 0x65e14804, "47a8a36a59c377334979b366fd802f776ad4b6a0"),
                    rom("253-p1.p1", 0x200000, 0x29e5224e, "474983983267851431ecbf0ad1573c286725bab0"),
                    rom("253-p2.sp2", 0x200000, 0xab6d69a2, "297284d83f627f54c0c759cb8a1d21c5cc12f7e3"),
                    rom("253-p3.sp3", 0x200000, 0x834f44b9, "833cefce4ae002aacc2069ec87d1cddb8ac33b7f"),
                    rom("253-p4.sp4", 0x200000, 0x949a1dfe, "b29f0a2baf30b2235bb052bb9b82b17e0b12c2f0"),
                ],
            ),
            fix(0x20000),
            area(
                0x40000,
                &[
                    rom("253-m1.m1", 0x40000, 0x6a6bb9b9, "305ecc4267c65bbc7916e8960c43a9a948b98541"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("253-v1.v1", 0x400000, 0x9b078559, "0123aea5f57edb71ce98579963b4580e673ef0e2"),
                    rom("253-v2.v2", 0x400000, 0x0ebc3bb1, "86f116f6e128a651ee735899e869f96f136ad5e4"),
                    rom("253-v3.v3", 0x400000, 0x87d1a33b, "a1d7eafdbbbfb0da7a2cc718b72d52645dfc3f16"),
                    rom("253-v4.v4", 0x400000, 0x951a7dbd, "aabdf51ac5a285452d0380bf5a00cac87fc2f85c"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("253-c1.c1", 0x800000, 0x93c9c859, "3cc322c847a1f6be2f128e71513a5a3f7adba645"),
                    rom("253-c2.c2", 0x800000, 0xca94367b, "5a4b55e351b539b334ed514188c8fa1c6f4e5671"),
                    rom("253-c3.c3", 0x800000, 0xe04a84c3, "e5e01e1c0e96b2a3b4ed40461ec6779e0343a479"),
                    rom("253-c4.c4", 0x800000, 0x6e609bc7, "e3887b4d19aebf1a8ff7c85c2f82b881458c12af"),
                    rom("253-c5.c5", 0x800000, 0x96093bf8, "f764d8232e7ba740d5dcc172dcfe1d44fcb46a9e"),
                    rom("253-c6.c6", 0x800000, 0x89fa6c4e, "9af503c45771fba9e96b704e4915e535f126e0cc"),
                    rom("253-c7.c7", 0x800000, 0x0ffe6dc7, "152f6f464dee0057806b6b3d2ec6daac6a96484b"),
                    rom("253-c8.c8", 0x800000, 0xedb1ebc9, "f8d5b1b38ad14294ddf52a089b0e8f9740727478"),
                ],
            ),
        ],
    },
    Game {
        id: "garouh",
        parent: Some("garou"),
        name: "Garou - Mark of the Wolves (alt)",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 38,
        recipe: Recipe::Sma(&sma::GAROUH),
        areas: [
            area(
                0x840000,
                &[
                    rom("kf.neo-sma", 0x40000, 0xee37f38d, "b891f50cf4684497218ddbe27facdbc16c375e60"),
                    rom("253-p1.p1", 0x200000, 0xc0a438f1, "81144478939a5a1305da92e75d5a17157541a731"),
                    rom("253-p2.sp2", 0x200000, 0x342f9722, "2254d0d2fa7f3ed51f3ec8c4a630442ec605c759"),
                    rom("253-p3.sp3", 0x200000, 0xe90a63a4, "03fcf320b803dbac21cb0ea359fdb3403588bcdc"),
                    rom("253-p4.sp4", 0x200000, 0x8804aeee, "3532cdec03a835b631ae0bfe14a88a1687c53b8e"),
                ],
            ),
            fix(0x20000),
            area(
                0x40000,
                &[
                    rom("253-m1.m1", 0x40000, 0xe78c4bb3, "cd0710d51c6d8b28d20f37ceec0e4356ff660d1e"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("253-v1.v1", 0x400000, 0x64ede932, "cc40ae60432c87f8e63e9a943d610536ccac452d"),
                    rom("253-v2.v2", 0x400000, 0x6d49182a, "f257073b992e96776955f8be1659290abad006ab"),
                    rom("253-v3.v3", 0x400000, 0x6162ef38, "63ab60b9306c43ed928ae9247968217da62769e4"),
                    rom("253-v4.v4", 0x400000, 0x2ec60959, "ed2aa2bdc1d02e300358f198e7d05ec78f1ac895"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("253-c1.c1", 0x800000, 0x207f84b6, "0af91d4584d98bf2ee381dbb407091e1e162f377"),
                    rom("253-c2.c2", 0x800000, 0x9c01c2e5, "d43a190c67adf2796f3b2d420b1d6325a34251b1"),
                    rom("253-c3.c3", 0x800000, 0x0adfca68, "e3731adf9f78d76d349f8cab2b2c4af1e5d31d0b"),
                    rom("253-c4.c4", 0x800000, 0xae3b2435, "79083a611df31bd3115c9c0be9ff6a271e5c9d3f"),
                    rom("253-c5.c5", 0x800000, 0xfe642674, "bf1db31afe2158579bb81d6853f8054eb2662f64"),
                    rom("253-c6.c6", 0x800000, 0x745d8ce1, "a9e2e4d16020734823cc2e991e15d007cd573321"),
                    rom("253-c7.c7", 0x800000, 0x31fa0292, "8f841cad64629ae631bb23f2a2c49afed9345c7d"),
                    rom("253-c8.c8", 0x800000, 0x418265df, "edf7238bee33f6d384f54a9a37b7cec467bd248d"),
                ],
            ),
        ],
    },
    Game {
        id: "garouha",
        parent: Some("garou"),
        name: "Garou - Mark of the Wolves (AES)",
        manufacturer: "SNK",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 38,
        recipe: Recipe::Sma(&sma::GAROU),
        areas: [
            area(
                0x840000,
                &[
                    rom("kf.neo-sma", 0x40000, 0xf29c0e58, "b79aac8559753845200fdf5b255b243aaf580cae"),
                    rom("253-p1.p1", 0x200000, 0xde83acf8, "c5e7fc76d62386c7d4f9c707df3eb950e196b6fa"),
                    rom("253-p2.sp2", 0x200000, 0xcb598111, "96f16fd7d7c6cb31c19977b084b844bf3bbe8d04"),
                    rom("253-p3.sp3", 0x200000, 0xa836feba, "a4927c0cefa1c49ed0b9adda0ee54af1c11c9cd7"),
                    rom("253-p4.sp4", 0x200000, 0x168e02b7, "65e62426aceed40ae4cc124d872342bb82d86353"),
                ],
            ),
            fix(0x20000),
            area(
                0x40000,
                &[
                    rom("253-m1.m1", 0x40000, 0x7624da4e, "79d879a2402586cd99bf7e2a6ae1aa0219013bf3"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("253-v1.v1", 0x400000, 0x0e0eea5a, "86c28705786919db8f89b9392827f1c198205033"),
                    rom("253-v2.v2", 0x400000, 0x38a22fa1, "e18bb095aa466a4d636be78a9554e450c7d4bbc4"),
                    rom("253-v3.v3", 0x400000, 0xe60b64af, "8c60e7b37b608b3c8bd54d90780fb6bc90934840"),
                    rom("253-v4.v4", 0x400000, 0xa56f8ff4, "0e388aa91c5e14765732ba42f86fa531adef728b"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("253-c1.c1", 0x800000, 0xbd77d46e, "a2da6b84d7b2a8c1bf6dabe6ebc122ad3c315c63"),
                    rom("253-c2.c2", 0x800000, 0xe26fb957, "52bb22744d8edf15f3c27faaf71961cead45943d"),
                    rom("253-c3.c3", 0x800000, 0x7c3a7e05, "e6d7c2ef45c0cf2fa3355ea9bc946c96ae81320c"),
                    rom("253-c4.c4", 0x800000, 0x85b11a0a, "0f6cea23bffa8d34f2fb90b055a5ffbfea416522"),
                    rom("253-c5.c5", 0x800000, 0x5a552ba0, "f6e07f3cb3d40debb169741f4251218449147003"),
                    rom("253-c6.c6", 0x800000, 0xae0429ce, "44cbb0c334442db03848a1f8f9701d374aa94c5f"),
                    rom("253-c7.c7", 0x800000, 0x0c67b9bf, "8e3f116f6316de24c8e134fc6475b6291c7e5dbb"),
                    rom("253-c8.c8", 0x800000, 0x20b4d094, "e855a14ddb416649db333975757c40b212991c40"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug3",
        parent: None,
        name: "Metal Slug 3",
        manufacturer: "SNK",
        year: 2000,
        genre: Genre::Action,
        screenshot: 101,
        recipe: Recipe::Sma(&sma::MSLUG3),
        areas: [
            area(
                0x840000,
                &[
                    rom("green.neo-sma", 0x40000, 0x257c9c5d, "8fe666232dbbc9cc88f5981f7ed319cc5b109ecd"),
                    rom("256-pg1.p1", 0x400000, 0xc117790d, "27efae613388ce01cf196f68cb4cba2c0134a3d8"),
                    rom("256-pg2.p2", 0x400000, 0x9e9b2b20, "5daaae25a67063e8ce3fe106c392dce373c62c84"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("256-m1.m1", 0x80000, 0x789425d3, "779de98c31b91c77d54bcca2b0b73d0c981f7d30"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("256-v1.v1", 0x400000, 0x47e28e3e, "cdee7627a755ec1a41b018a053bf9feab926e642"),
                    rom("256-v2.v2", 0x400000, 0x67348a79, "a84755df3728ab73bac299adc7745516bf7e383f"),
                    rom("256-v3.v3", 0x400000, 0xd99bb602, "290c2b46896a78a4be46091ba13eaedc16b6b35e"),
                    rom("256-v4.v4", 0x400000, 0x2987ec2d, "98b63d45b0978e678177b8f82e5d5b2b7f6cfb19"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("256-c1.c1", 0x800000, 0x052a6a61, "0e62e2fb21d0885292e0cfbdb7bcff41345cc4d1"),
                    rom("256-c2.c2", 0x800000, 0xc78af167, "4d502220e2f492b99e027fa8665a16097e0bca64"),
                    rom("256-c3.c3", 0x800000, 0x7a36b64d, "a1f44099992f14ae1fb0ed021fe387d7d204baba"),
                    rom("256-c4.c4", 0x800000, 0x5ced7ead, "d9473b89909b3c882d0ee9811b0b5fcf5d1e1c1d"),
                    rom("256-c5.c5", 0x800000, 0x8520de9e, "381adfa2bab69a05407b380536e3e5cac0ecb40f"),
                    rom("256-c6.c6", 0x800000, 0x33449301, "4b59c818ba5b90d5f6680533259d9be4d059d3b6"),
                    rom("256-c7.c7", 0x800000, 0xef2f67ec, "65e5559945d63e8b1aa8b5335f1cb92c7c1cb028"),
                    rom("256-c8.c8", 0x800000, 0x58e215b3, "ff2e91a6beab3114128e82e6a79260dc97a04af0"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug3a",
        parent: Some("mslug3"),
        name: "Metal Slug 3 (earlier SMA)",
        manufacturer: "SNK",
        year: 2000,
        genre: Genre::Action,
        screenshot: 101,
        recipe: Recipe::Sma(&sma::MSLUG3A),
        areas: [
            area(
                0x840000,
                &[
                    rom("white.neo-sma", 0x40000, 0x6ae24365, "bf6bd426d60d28bc743aed38473c7e3658052474"),
                    rom("256-pg1a.p1", 0x400000, 0xf08a9947, "b9b99ae448ceacf48db23a153390ba60baddf72a"),
                    rom("256-pg2a.p2", 0x400000, 0x3e4b1ce8, "39e1dcc2de3a91109e2fce26a6e0e5f3b1f38d74"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("256-m1.m1", 0x80000, 0x92fbe011, "6ba2b4edaf94df96093a29b18ac3f8bfe1967e12"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("256-v1.v1", 0x400000, 0x9e45c102, "be4e66f926ff55297fc50fe15a06d7807caea551"),
                    rom("256-v2.v2", 0x400000, 0x7a13e8e8, "4773e4feb04452a01cf976bea1acf411d8d4f302"),
                    rom("256-v3.v3", 0x400000, 0x81911ace, "ba341d2c8e36b3c63dbac8043b6fec91e96b2c86"),
                    rom("256-v4.v4", 0x400000, 0x1b6a8eef, "0613abc73a05ed1ce57855f5cc2f3f8db50ed7c2"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("256-c1.c1", 0x800000, 0x3c550a0f, "a2e16bbd7f847be8a8d3b4aec6065d4e2c68a12a"),
                    rom("256-c2.c2", 0x800000, 0x06bf16da, "652c00bae674016ae1190a1cf1805f796f9ae5b0"),
                    rom("256-c3.c3", 0x800000, 0x5b665947, "4b357a203ba894324b58cc79f76485e7d3de5595"),
                    rom("256-c4.c4", 0x800000, 0x7327ace4, "2864a99e367000838b01984cde5c7971243c0ebc"),
                    rom("256-c5.c5", 0x800000, 0x57b958ed, "341e5da88fad57bf805f71e474d4b13099372b3d"),
                    rom("256-c6.c6", 0x800000, 0x6da000a8, "079e729f48b2c26a1e19b6c5a6d946717a2475ac"),
                    rom("256-c7.c7", 0x800000, 0x917bb530, "a14ee4b27135186bd63e3898913d2e7bb095cf73"),
                    rom("256-c8.c8", 0x800000, 0x118ad7db, "3e8259c71f2bb38b91b59ab188e2ab6bb111cff2"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2000",
        parent: None,
        name: "The King of Fighters 2000",
        manufacturer: "SNK",
        year: 2000,
        genre: Genre::Fighting,
        screenshot: 63,
        recipe: Recipe::Sma(&sma::KOF2000),
        areas: [
            area(
                0x840000,
                &[
                    rom("neo-sma", 0x40000, 0x765a614a, "31fbf5f4972a2833240472eafbe7e03e605e0042"),
                    rom("257-p1.p1", 0x400000, 0xe28b2b57, "cc95c43c68346393b2c8e0901d8cef9b9b788813"),
                    rom("257-p2.p2", 0x400000, 0x359b0ca1, "659698608208a7920eaedf3a74029d327934dde4"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("257-m1.m1", 0x80000, 0xf6e0043d, "2048e04c450c57c36acf7b5bb5bffaacd4c673c6"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("257-v1.v1", 0x400000, 0x47ed62ef, "bf7dd52ab29414ef94e9ba254a6ccf2c8e136f33"),
                    rom("257-v2.v2", 0x400000, 0x02bbcc0d, "c372b423a046e8be43f9257474c14f8a21928c03"),
                    rom("257-v3.v3", 0x400000, 0x44b30b5e, "e66dfda0e5144c079cd5a9086ff4338821ceda87"),
                    rom("257-v4.v4", 0x400000, 0x10647376, "c3b55eb96311a4f5d65cc828f0d662f974df7756"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("257-c1.c1", 0x800000, 0x8e1f8106, "01bc11e8f73f496f29daed7385f5b11b3425d5da"),
                    rom("257-c2.c2", 0x800000, 0x174aa87e, "a7b0df08aa6cae90006dd2928ffa5593256b15ef"),
                    rom("257-c3.c3", 0x800000, 0x4a0faadc, "d5ca0bc35f5955575438ca7c2103c57785a7a181"),
                    rom("257-c4.c4", 0x800000, 0x7eee3563, "db388413b6036c55a240dd16e986b555b3b15f7b"),
                    rom("257-c5.c5", 0x800000, 0xabfb9e83, "6ae01e0e61d8f23dc2e3423ba6489efe7b4a4320"),
                    rom("257-c6.c6", 0x800000, 0xe45e08f7, "7a560a58e2c010f8b843006279adf1954287f4b5"),
                    rom("257-c7.c7", 0x800000, 0x45782133, "7ca77d54bd67723c920fe881a7551bde4259ec62"),
                    rom("257-c8.c8", 0x800000, 0xc2b31a0c, "bb392dac87b302227ade18acc3cb405405e0527b"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug5",
        parent: None,
        name: "Metal Slug 5",
        manufacturer: "SNK Playmore",
        year: 2003,
        genre: Genre::Action,
        screenshot: 104,
        recipe: Recipe::Pvc(&pvc::MSLUG5),
        areas: [
            area(
                0x800000,
                &[
                    rom("268-p1cr.p1", 0x400000, 0x67ad77ad, "1e8c33f3a752a440776654683ca1db85982fe19f"),
                    rom("268-p2cr.p2", 0x400000, 0xd5d5eff8, "bdbe07794cfb65082dc49c325f550e86fd90e44c"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("268-m1.m1", 0x80000, 0xf05e36ca, "a0cabf264e2f268d791e5626c5201658d1f641de"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("268-v1c.v1", 0x800000, 0xbb546434, "c0aed983444e7e1f8017c76aca2a216d6444a552"),
                    rom("268-v2c.v2", 0x800000, 0x1e6daa17, "ecb345e067fabfe73ca92459896288b2ff459798"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("268-c1.c1", 0x800000, 0x02ae31bb, "5f17aa33eb198cc04455ccb2f5e28b10f8bf747b"),
                    rom("268-c2.c2", 0x800000, 0x9de79733, "304df9fc607425f809f83601b90b7c76a042ff49"),
                    rom("268-c3.c3", 0x800000, 0x200a7856, "365fcb32b9b6926907fc0d281aa5afd2827bb026"),
                    rom("268-c4.c4", 0x800000, 0x399097dc, "f37324b967608ed5fdffa51e3f60670418ebd4a5"),
                    rom("268-c5.c5", 0x800000, 0x607cd71b, "20a5894da17dbf4f1760c5889cd66f5964e6de06"),
                    rom("268-c6.c6", 0x800000, 0x38cb5123, "31784dd08ec5019c452efd455418a6e68b5b2d39"),
                    rom("268-c7.c7", 0x800000, 0x2b826864, "90d119257a8e4257781e833342ce27956fe16cf3"),
                    rom("268-c8.c8", 0x800000, 0x4ab41c99, "babf5481f6f1f6d4d365e13a28eb8734becc9e1e"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug5h",
        parent: Some("mslug5"),
        name: "Metal Slug 5 (NGH-2680)",
        manufacturer: "SNK Playmore",
        year: 2003,
        genre: Genre::Action,
        screenshot: 104,
        recipe: Recipe::Pvc(&pvc::MSLUG5),
        areas: [
            area(
                0x800000,
                &[
                    rom("268-p1.p1", 0x400000, 0x4a1cf260, "a77fcf1732df245c993def023ab3610d488da5db"),
                    rom("268-p2.p2", 0x400000, 0xef205a71, "a827a48e080eab9cc48e025f9f5b9cb339757e92"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("268-m1.m1", 0x80000, 0x725b5e21, "206ca32c1439229208f2d1f9af712d85ccc2d68e"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("268-v1c.v1", 0x800000, 0xb3f646b5, "67dca8fa28a5481acd2918b1bb6e2fef56f52249"),
                    rom("268-v2c.v2", 0x800000, 0x32e66bdb, "552300496caaca5d33e3ced5941474802da7f247"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("268-c1.c1", 0x800000, 0x6603aa77, "2c33a1b4d68ba2510e87ccf3738de4ef9d4d0f1f"),
                    rom("268-c2.c2", 0x800000, 0x075349a0, "41334968475b33770ae4e16910d0883f4990d154"),
                    rom("268-c3.c3", 0x800000, 0x48d77e70, "9f555f837d50e17f1483e8b40c7e968b2f4d88bc"),
                    rom("268-c4.c4", 0x800000, 0xa61336e8, "e39b08a7f86b9ed006d8647df076551f440ca5ab"),
                    rom("268-c5.c5", 0x800000, 0x3415010d, "2e08e435ba20133cbf5ccd2bf3d09917ae816997"),
                    rom("268-c6.c6", 0x800000, 0xabeb1843, "b3d6a18f623ebc224906787b9395a69778e8791f"),
                    rom("268-c7.c7", 0x800000, 0x2a9aa5a1, "6a0b8e4984f50eb30e65fa7fad1a12122e883814"),
                    rom("268-c8.c8", 0x800000, 0xdc810650, "4ea8ae7f62c0a3399616718fc5fb240e3c014a73"),
                ],
            ),
        ],
    },
    Game {
        id: "svc",
        parent: None,
        name: "SNK vs. Capcom - SVC Chaos",
        manufacturer: "SNK Playmore",
        year: 2003,
        genre: Genre::Fighting,
        screenshot: 165,
        recipe: Recipe::Pvc(&pvc::SVC),
        areas: [
            area(
                0x800000,
                &[
                    rom("269-p1.p1", 0x400000, 0xaff7fe55, "2c9603454ea13ab641e447c440539e82b31829d4"),
                    rom("269-p2.p2", 0x400000, 0x75963ecc, "4c0aeda0c50ea39d4ccd8e62f29588b79f6ffe8d"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("269-m1.m1", 0x80000, 0x5ada1d5e, "ece1ff9f1523861d379a03ce922b54eb6e783d03"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("269-v1.v1", 0x800000, 0xe496b80a, "d3ebe9c3f7dbc7ae5135ce2182ec6765deeaa8ef"),
                    rom("269-v2.v2", 0x800000, 0x299b20ec, "776036f88dec620fc0217b27d62e0a9d74c902c9"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("269-c1.c1", 0x800000, 0x0f6ebb7f, "15d1be216afaf70f56d351f868e3bb69fbcdf462"),
                    rom("269-c2.c2", 0x800000, 0x83405371, "cd37c525672846b7ce771d60ea27577d7c45d736"),
                    rom("269-c3.c3", 0x800000, 0x6068f787, "be86de47e684ff4d4df593f2017c97636005351c"),
                    rom("269-c4.c4", 0x800000, 0xc185bd48, "c4f36ed451b588c3703b64a8567ae4dcc57b1bbd"),
                    rom("269-c5.c5", 0x800000, 0xd469836b, "facccc6ed55889d24eaa33947f177fffe2fbe2fb"),
                    rom("269-c6.c6", 0x800000, 0x82a6f224, "86c0530cb1446044b039f097b71aa43d056b8b8e"),
                    rom("269-c7.c7", 0x800000, 0x094ea8e3, "c88ac122a408965033b53766c70cdcb5ba0d9d41"),
                    rom("269-c8.c8", 0x800000, 0x898db87b, "9c4b6a6486404f71462fffda329b88be091875b8"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2003",
        parent: None,
        name: "The King of Fighters 2003",
        manufacturer: "SNK Playmore",
        year: 2003,
        genre: Genre::Fighting,
        screenshot: 66,
        recipe: Recipe::Pvc(&pvc::KOF2003),
        areas: [
            area(
                0x900000,
                &[
                    rom("271-p1c.p1", 0x400000, 0xab9aebd9, "5fd04950b35d214ec1bb52f40877edfae1cde597"),
                    rom("271-p2c.p2", 0x400000, 0x45a87cbe, "f3b3ba854ad8cd4ce23bd520fcbf38b0d71b5a18"),
                    rom("271-p3c.p3", 0x100000, 0xfb777452, "bd4dca1ebeb36558452eb234a48f5bf9aa144491"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("271-m1.m1", 0x80000, 0x5e5a1100, "1e6113dc76a9b732841396f5f5d17d148ca90325"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("271-v1c.v1", 0x800000, 0x8f455e58, "a2919c0042cc8aa3c6a9d5e10b2eac90b0ee0d81"),
                    rom("271-v2c.v2", 0x800000, 0x4c7b39cc, "db00604ef526e3ee496712b261b61e3bb9c2325f"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("271-c1.c1", 0x800000, 0x402a58e6, "19a4c090aad8fd784dc8a9e85f9e2276daf9a475"),
                    rom("271-c2.c2", 0x800000, 0x78e89842, "85fc8baed93c333e0d3a63c3f539c005a52e02b6"),
                    rom("271-c3.c3", 0x800000, 0x94ae6efe, "424f321abcaf28c22c65747fc20583dccc7006ef"),
                    rom("271-c4.c4", 0x800000, 0xa3893edb, "952c1eb572c4b052533872dc317bc46540e0a1eb"),
                    rom("271-c5.c5", 0x800000, 0xe1b23735, "fd6c2149aa8d919513e574c228f2c7ac3c619d58"),
                    rom("271-c6.c6", 0x800000, 0x165336f2, "e257abb18d12bafcd724a62a06d40264d4abf1fc"),
                    rom("271-c7.c7", 0x800000, 0x13c4b265, "396deacada21053755ab05db9a417c814a88d80d"),
                    rom("271-c8.c8", 0x800000, 0xa7374d69, "e45980daa545602ac5484634f1fd6465b67aecb5"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2003h",
        parent: Some("kof2003"),
        name: "The King of Fighters 2003 (alt)",
        manufacturer: "SNK Playmore",
        year: 2003,
        genre: Genre::Fighting,
        screenshot: 66,
        recipe: Recipe::Pvc(&pvc::KOF2003H),
        areas: [
            area(
                0x900000,
                &[
                    rom("271-p1k.p1", 0x400000, 0xf51a85f9, "7d4b85e80ce8d4c2f936b21d7f2168d5e99b1b27"),
                    rom("271-p2k.p2", 0x400000, 0x69d8cc89, "1abed9660cfeb8b6e60b3a7e05083a58ba9224bb"),
                    rom("271-p3k.p3", 0x100000, 0x518eb396, "f34acec32d0e3aedf9f6b1a0877acc07aae9f292"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("271-m1k.m1", 0x80000, 0xba754825, "1a82d36d8f410e69e8078d0c59fa65b6c367c9bc"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("271-v1c.v1", 0x800000, 0x7a6c73b9, "053d44af7484314518d381b34b4141a3c6cd54f7"),
                    rom("271-v2c.v2", 0x800000, 0x24cb6777, "9b2ed314310baad8c0035d8229284cab861e8a57"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("271-c1.c1", 0x800000, 0x3f444da3, "95c80d359af21382087d64566ae73b264e795346"),
                    rom("271-c2.c2", 0x800000, 0x39b09557, "142956bf7ed076fc1bfa7ff7e859f5895f580372"),
                    rom("271-c3.c3", 0x800000, 0xf3eb2494, "3d43bd728e25e20afdde773b42cdef607de5e185"),
                    rom("271-c4.c4", 0x800000, 0xe5f0ac78, "3d891f0a984db8aab29aecd8c8ef4cf43a79c88d"),
                    rom("271-c5.c5", 0x800000, 0x048d6f61, "40dc6155e24bfa835f1c35386bb6710e4fa8ff58"),
                    rom("271-c6.c6", 0x800000, 0x58f7e29e, "71ee0131c0b5a4c8143cc26f4173769283b826c7"),
                    rom("271-c7.c7", 0x800000, 0x1725b24f, "52b32e2ff213a4b067d2e218588f30e696563556"),
                    rom("271-c8.c8", 0x800000, 0x05c0dfab, "fdd88b4b2ce8d557341449872d9aceb2dad0a23b"),
                ],
            ),
        ],
    },
    Game {
        id: "kof2002",
        parent: None,
        name: "The King of Fighters 2002",
        manufacturer: "Eolith / Playmore",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 65,
        recipe: Recipe::K2k2 { xor: 0xec, swap: 0, offset: 0x100000, blocks: &k2k2::KOF2002_BLOCKS },
        areas: [
            area(
                0x500000,
                &[
                    rom("265-p1.p1", 0x100000, 0x38819627, "f5487f0c87ed7f37f1b3610ff4ea0a7e1609d6c4"),
                    rom("265-p2.p2", 0x400000, 0x6d037e72, "7bb7e69bb6116885a5ca9f2cc1a19e9d879f0722"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("265-m1.m1", 0x80000, 0xd63cf25e, "e77ff201182fee65e9467b908091d3828b5a9460"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("265-v1.v1", 0x800000, 0xcc82c9bd, "a80cbf10aac995ce4f6a66290367f4be8bdf8af1"),
                    rom("265-v2.v2", 0x800000, 0xd48236b9, "d34b23723f876a2cac99313b38e9ea4241eb48b2"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("265-c1.c1", 0x800000, 0xe68c368f, "ac08797be9c1d01aa857abeaf1409b86cf2f376f"),
                    rom("265-c2.c2", 0x800000, 0x20c2d939, "258c19de9e62d843350a5bd25e9d6f30a1cf9423"),
                    rom("265-c3.c3", 0x800000, 0xb5b54a88, "ab173eb69e82f838ceb61cde790beb90c4cb192a"),
                    rom("265-c4.c4", 0x800000, 0xe516e70c, "2e0451412797aa41aba31299982051b001e8e01b"),
                    rom("265-c5.c5", 0x800000, 0xd4820b60, "cef2d70b1547f82c4dd6358d6ffd5d45fd1a00ee"),
                    rom("265-c6.c6", 0x800000, 0x90786a23, "5c837e292c5ced5b2a2385cce04d4529cdb046d4"),
                    rom("265-c7.c7", 0x800000, 0x7f90bd2d, "6f26d9d7bb67d0b778b6e7a795ca54fdb381de36"),
                    rom("265-c8.c8", 0x800000, 0x9d057a7b, "f77925c9be470dc43f86e710b7bd22688273403b"),
                ],
            ),
        ],
    },
    Game {
        id: "kf2k2pls",
        parent: Some("kof2002"),
        name: "The King of Fighters 2002 Plus",
        manufacturer: "bootleg",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 56,
        recipe: Recipe::K2k2 { xor: 0xec, swap: 0, offset: 0x100000, blocks: &k2k2::KOF2002_BLOCKS },
        areas: [
            area(
                0x500000,
                &[
                    rom("265-p1p.bin", 0x100000, 0x4016258b, "5b1c6718d5728730c06f72fb48be10119e761cbe"),
                    rom("265-p2.p2", 0x400000, 0x355761aa, "f1d755ab3b0afec273310f346113f328a657b8cd"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("265-m1.m1", 0x80000, 0x34e849c6, "e505f0971ce90c16a7ffa1cf184c311e545a2801"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("265-v1.v1", 0x800000, 0x31b31e61, "bc3e579dd5a234c2ace3cd34c87ba3382754fea9"),
                    rom("265-v2.v2", 0x800000, 0x0410c6e8, "39329e79f0bd06595b6ef1adf9f0dc92e53fbe4c"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("265-c1.c1", 0x800000, 0x77cdf697, "428390d2a25ae5a632b3d0717446495060f12a08"),
                    rom("265-c2.c2", 0x800000, 0xace4c58e, "3109bf10c920232d5b725e720b0c3b775fc32f28"),
                    rom("265-c3.c3", 0x800000, 0x9d32a3af, "baad8cce89c5a7319b73dc38eb18cf0700e616c2"),
                    rom("265-c4.c4", 0x800000, 0xc113bf42, "99fa3a52af729b3a6309b240153a500b6e9e8c11"),
                    rom("265-c5.c5", 0x800000, 0x749077ea, "884d9872b1f9691d7a89bcfd7eaa0a6e58a68b35"),
                    rom("265-c6.c6", 0x800000, 0x954f3330, "216c6ad9033db34eaf3a670f8e66576fd6914a3b"),
                    rom("265-c7.c7", 0x800000, 0x80b472e3, "b1b9410761ba00d5de76dc4ad8ada24e5539ca83"),
                    rom("265-c8.c8", 0x800000, 0x7d973001, "df90273db3777719a2cc922d6199d21bfc7d9259"),
                ],
            ),
        ],
    },
    Game {
        id: "matrim",
        parent: None,
        name: "Power Instinct Matrimelee",
        manufacturer: "Noise Factory",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 93,
        recipe: Recipe::K2k2 { xor: 0x6a, swap: 1, offset: 0x100000, blocks: &k2k2::MATRIM_BLOCKS },
        areas: [
            area(
                0x500000,
                &[
                    rom("266-p1.p1", 0x100000, 0x7da6cb2c, "36e0366e4f48c07a1d8fa4a6ad5f81dce076f766"),
                    rom("266-p2.p2", 0x400000, 0x0e8ee728, "4bfad4ac93fced3b43696ad4368456f04fd3e482"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("266-m1.m1", 0x80000, 0xa52ec6fd, "8b8ef38d0c966eee7410942cd818c2365e775e37"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("266-v1.v1", 0x800000, 0x9a67af45, "bbaad20b0b942b4276e66e0d0bce21863beefab7"),
                    rom("266-v2.v2", 0x800000, 0x69d8664e, "90378535997ed32a2dbfb0a5733eea923639f452"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("266-c1.c1", 0x800000, 0x133f5a68, "759aa75fdf6780e2e2d96dc5bf7d18e7e138b5d8"),
                    rom("266-c2.c2", 0x800000, 0x4c603a9e, "98fd7ee7fa4ae67c8d88d3ce5da84f36e897e958"),
                    rom("266-c3.c3", 0x800000, 0x3f0cc37a, "46c7d24c4cca194cbce6c71ea368304f35ccf1e2"),
                    rom("266-c4.c4", 0x800000, 0xf7fafc51, "649647d1f9fc6dd956885a217ee8b0663b420738"),
                    rom("266-c5.c5", 0x800000, 0x6fff88ae, "d7e6b0f00fc19c77503aa05409876a55e3c77ed5"),
                    rom("266-c6.c6", 0x800000, 0x63aed0d7, "f9d1de119990f5ec971a38f07c910bf7629e6ffc"),
                    rom("266-c7.c7", 0x800000, 0xa496296b, "53ca0aa3375d6d0104a90c25baea3bbc24c2a825"),
                    rom("266-c8.c8", 0x800000, 0x7d114fcf, "7f08e96737835ad3c17eeea926e7c9f7736d8ae5"),
                ],
            ),
        ],
    },
    Game {
        id: "samsho5",
        parent: None,
        name: "Samurai Shodown V",
        manufacturer: "Yuki / Playmore",
        year: 2003,
        genre: Genre::Fighting,
        screenshot: 144,
        recipe: Recipe::K2k2 { xor: 0x0f, swap: 4, offset: 0x0, blocks: &k2k2::SAMSHO5_BLOCKS },
        areas: [
            area(
                0x800000,
                &[
                    rom("270-p1.p1", 0x400000, 0x3e421038, "9103ab5c6503d83b0c5ff17ed6f957e1cb78d87d"),
                    rom("270-p2.sp2", 0x400000, 0x0fdf07b2, "17ae44cad15f6e135d299d1171d3fb3634589ab4"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("270-m1.m1", 0x80000, 0x4ed0085a, "531590126e48b28d1c0029bfd0d5e9293feefd43"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("270-v1.v1", 0x800000, 0x8ce31ec1, "967735d19929cdad5d7a20426a5b6e4d147f5074"),
                    rom("270-v2.v2", 0x800000, 0xf7dac743, "0c37110fa2422019e5319bf5b7cd61cefb0c009f"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("270-c1.c1", 0x800000, 0x8f11b8ca, "fb91553c431d0228df2033846712eef74fbf6420"),
                    rom("270-c2.c2", 0x800000, 0x7adbde63, "cf67c6c61edb634f35dfcf9e5cf7a155fcf8efa4"),
                    rom("270-c3.c3", 0x800000, 0x2a068582, "cfe7f046d6fc070dcac17be754bfb870b8e09437"),
                    rom("270-c4.c4", 0x800000, 0x5e8655d3, "0b1bc789dd3c7dac6832313d3c75d71c2f006d0a"),
                    rom("270-c5.c5", 0x800000, 0x5ad507ab, "48b03400945410d830f7559b1f7f6c3289018cda"),
                    rom("270-c6.c6", 0x800000, 0x9e4f9439, "0631c364a5b5a985a849ea3a604f59d4832bdba7"),
                    rom("270-c7.c7", 0x800000, 0x900e7b09, "1bc671edea8c2f989b8353505f672008e5965699"),
                    rom("270-c8.c8", 0x800000, 0xc3b52555, "e4de8ee80c119ce3f47208fa40d2a55e13e4dea3"),
                ],
            ),
        ],
    },
    Game {
        id: "samsh5sp",
        parent: None,
        name: "Samurai Shodown V Special",
        manufacturer: "Yuki / Playmore",
        year: 2004,
        genre: Genre::Fighting,
        screenshot: 139,
        recipe: Recipe::K2k2 { xor: 0x0d, swap: 6, offset: 0x0, blocks: &k2k2::SAMSH5SP_BLOCKS },
        areas: [
            area(
                0x800000,
                &[
                    rom("272-p1.p1", 0x400000, 0x9040a9ab, "c4ed24b8e04e144c106b70488f9952e06b565513"),
                    rom("272-p2.sp2", 0x400000, 0x066356c7, "156305610b8622057b13751764d555e1348a8827"),
                ],
            ),
            fix(0x20000),
            area(
                0x80000,
                &[
                    rom("272-m1.m1", 0x80000, 0xd6f069e2, "405d0040aa38fd64ed2e4a6b71a213b3a2802635"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("272-v1.v1", 0x800000, 0x2851a836, "9019f254b8f62b38dedaf907b7fee3503e17052e"),
                    rom("272-v2.v2", 0x800000, 0x1067e8dc, "dc78b351899adbe846b7b0114fa9763b71ceb19d"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("272-c1.c1", 0x800000, 0x4357502e, "ee4acec7a68d581c0f2c93e26b4c0d78129e1e86"),
                    rom("272-c2.c2", 0x800000, 0x6a83460d, "877206d7bbbab75b839ec7b66189dbf0877c1ad7"),
                    rom("272-c3.c3", 0x800000, 0x554c00be, "ca23a83b7a9c1538752fab739b93bd623fc7eb06"),
                    rom("272-c4.c4", 0x800000, 0x9ca497ba, "b756e9ebc0dfd9c1d0bb9335ff6d8bf80c7dea6f"),
                    rom("272-c5.c5", 0x800000, 0x918c6235, "8590d2c5c31593d33b8685f50b1716fb82947e76"),
                    rom("272-c6.c6", 0x800000, 0x135dcdba, "ab75613bb63906325c1feb709daf69ad30f9b0d8"),
                    rom("272-c7.c7", 0x800000, 0x7f23b2df, "1ecee25cd0622abde0d88c0c77400e96ffee61d1"),
                    rom("272-c8.c8", 0x800000, 0xcbde0e08, "c1abc8ce3b6c96a608b29f5356456c398f44e454"),
                ],
            ),
        ],
    },
    Game {
        id: "kof97oro",
        parent: Some("kof97"),
        name: "KOF '97 Oroshi Plus 2003",
        manufacturer: "bootleg",
        year: 1997,
        genre: Genre::Fighting,
        screenshot: 72,
        recipe: Recipe::Kof97Oro,
        areas: [
            area(
                0x500000,
                &[
                    rom("orochi-p1.bin", 0x100000, 0x329840d7, "a6abae25ca2d40e3828c4c1e7e0aea00a07664df"),
                    rom("orochi-p2.bin", 0x200000, 0xf0ad5cd8, "75c92f169a641bc205244857013b492d52a55fcc"),
                    rom("orochi-p3.bin", 0x200000, 0xc5047448, "80e90cf8c2cf27760f2b23dc9b0d4a99af157f78"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("orochi-s1.bin", 0x20000, 0x22c57791, "c64526b081b3b710664f6fa4abfbd4962eec4510"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("232-m1.m1", 0x20000, 0xd62c35d4, "e8780e95164000234ef48273872dae4fc0d3d489"),
                ],
            ),
            area(
                0xc00000,
                &[
                    rom("232-v1.v1", 0x400000, 0x68f51fd2, "9db58603fa8c9d7d594e5ae85abfb0319c457704"),
                    rom("232-v2.v2", 0x400000, 0x86cbd504, "cca7a0fd38d82094de15ee0d2cde1e48eafe3e2d"),
                    rom("232-v3.v3", 0x400000, 0x51b4ada1, "78043abe0c41e34545cea736583a498c9bf5f757"),
                ],
            ),
            none(),
            area(
                0x1800000,
                &[
                    rom("orochi-c1.bin", 0x400000, 0x2ea06407, "b2c19f3b888d9605d4b61c16d841b2bdd2075627"),
                    rom("orochi-c2.bin", 0x400000, 0x44c9a9cd, "980e3a70245695c69d2403b65fe57b03569bbbfa"),
                    rom("orochi-c3.bin", 0x400000, 0x90903be6, "d1b31489a3108b098b89b34451379d0c4d36a6fc"),
                    rom("orochi-c4.bin", 0x400000, 0xbe1c0808, "2d2fb0154b0b3104c5594d6edd1b15d658960bb5"),
                    rom("orochi-c5.bin", 0x400000, 0x495206a3, "40d9a0bb4f6d7add82eaabbae252046e5267bcbf"),
                    rom("orochi-c6.bin", 0x400000, 0x29fad3ec, "750d05a301b30b2816bd2e8cab9fbb8dc9c33c75"),
                ],
            ),
        ],
    },
    Game {
        id: "lans2004",
        parent: None,
        name: "Lansquenet 2004",
        manufacturer: "bootleg",
        year: 2004,
        genre: Genre::Action,
        screenshot: 80,
        recipe: Recipe::Lans2004,
        areas: [
            area(
                0x600000,
                &[
                    rom("lnsq-p1.bin", 0x200000, 0xea37fd96, "a03d94e56373340418925105d8c78f95e6417d64"),
                    rom("lnsq-p21.bin", 0x200000, 0xc097cfc3, "7a77b49d73f1e054e910fc2390b15937411d8823"),
                    rom("lnsq-p22.bin", 0x200000, 0x306fb5a5, "95f5ea66b619c8cb25ad917791f4ed28f0b2230c"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("lnsq-s1.bin", 0x20000, 0x6b30e07e, "938c296ddbd5f5e178fb885f27b31e1710216461"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("lnsq-m1.bin", 0x20000, 0xd2fbdd8c, "f70c05e398cdd7a645d903759b63a5229f879689"),
                ],
            ),
            area(
                0xa00000,
                &[
                    rom("lnsq-v1.bin", 0x400000, 0x56623859, "bd3d512c3ee0e56638701944264c72db33021bcf"),
                    rom("lnsq-v2.bin", 0x400000, 0x3dc889ba, "3ba6790777805b3d14c0df4935bebf475ff5996b"),
                    rom("lnsq-v3.bin", 0x200000, 0xe5ddbafd, "bd542d616682e2c1c5ff5ccd73e73cf405bcfb55"),
                ],
            ),
            none(),
            area(
                0x1800000,
                &[
                    rom("lnsq-c1.bin", 0x400000, 0x1c4f7dfa, "826989d9df8ea5165ebadde8b79fd334e322d584"),
                    rom("lnsq-c2.bin", 0x400000, 0x19e7fd7a, "634e5e81b6a43a6dc25cd365fe36d9e99cb62a78"),
                    rom("lnsq-c3.bin", 0x400000, 0xdf4b600c, "da9af06054b94c15099784c0718556479a37e5f7"),
                    rom("lnsq-c4.bin", 0x400000, 0x34db4685, "17651913bd55de37cd2b3141eb97a87e91253799"),
                    rom("lnsq-c5.bin", 0x400000, 0xdcfe995f, "847fd9606f31ca5f99803e1c3ce0f6e5c3dc6fbe"),
                    rom("lnsq-c6.bin", 0x400000, 0x43d4cbe8, "98a3d2c68cf2dd04686354ba9009c98ad9590a32"),
                ],
            ),
        ],
    },
    Game {
        id: "matrimbl",
        parent: Some("matrim"),
        name: "Matrimelee (bootleg)",
        manufacturer: "bootleg",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 93,
        recipe: Recipe::MatrimBl,
        areas: [
            area(
                0x500000,
                &[
                    rom("266-p1.p1", 0x100000, 0x2894228f, "7e303ab5441c3b4cca6c2bcf87d7e9ff2458af03"),
                    rom("266-p2.p2", 0x400000, 0x1136bad4, "e86ccc0f37e8c867f03385cc049b1af3ae1e5419"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("mart-s1.bin", 0x20000, 0xc1f6c476, "77a4411b96f99415e8abad1b3990c01d7cc020e4"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("mart-m1.bin", 0x20000, 0x86aa74c5, "50aa7033768d0033ba08c1826548a5512f931234"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("mart-v1.bin", 0x400000, 0x64058c48, "282f5cc0020234044d330e37a1312ee86d2ea1b4"),
                    rom("mart-v2.bin", 0x400000, 0x7e8c6ae2, "78cec4d0929eaac94d4a5bf115c009d0c2b90e83"),
                    rom("mart-v3.bin", 0x400000, 0x7ce3d4e2, "22c88e51407da4904536c825e006c532bc446d8e"),
                    rom("mart-v4.bin", 0x400000, 0xb7c63741, "5fa8bce84e270f68f98e6c18bde2e7ce7a142f18"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("mart-c1.bin", 0x800000, 0x9bc0dd23, "1ee07014006d9f66099ba80886b796febccd76ed"),
                    rom("mart-c2.bin", 0x800000, 0xe654f4cc, "e9f08637db55ba4fcd1921de4265aba3d83a0826"),
                    rom("mart-c3.bin", 0x800000, 0x7191d825, "8437687827cfa58e522bc257d74e1169e9480796"),
                    rom("mart-c4.bin", 0x800000, 0xbcc1ca4b, "e4832386008610b2bda82cbb099d71fca14ffdfb"),
                    rom("mart-c5.bin", 0x800000, 0x6914bd44, "196d9c383bbefc5f00083658aee67f905843dedb"),
                    rom("mart-c6.bin", 0x800000, 0xd1791b0c, "8514c72d5a9bcce16d798325e4b37db6aa1ee41e"),
                    rom("mart-c7.bin", 0x800000, 0xac54cd1a, "52e462e2244a36ee039fddd27a58caf36eb002d9"),
                    rom("mart-c8.bin", 0x800000, 0x82f7b2f2, "e7662e710667979ead5a65d9e422cf861667d289"),
                ],
            ),
        ],
    },
    Game {
        id: "mslug3b6",
        parent: Some("mslug3"),
        name: "Metal Slug 6 (bootleg)",
        manufacturer: "bootleg",
        year: 2000,
        genre: Genre::Action,
        screenshot: 102,
        recipe: Recipe::Mslug3B6,
        areas: [
            area(
                0x600000,
                &[
                    rom("299-p1.bin", 0x200000, 0xce1e6286, "c77d6d111adc16e645ecb8921a259d0796688a3b"),
                    rom("299-p2.bin", 0x400000, 0x557ee6a3, "81ec24a770ec14c736bec4e6aec0a2d5bf793022"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("299-s1.bin", 0x20000, 0x8a96c588, "d71e47b33c056bc2f01383170e9b4b92ac931bec"),
                ],
            ),
            area(
                0x80000,
                &[
                    rom("256-m1.m1", 0x80000, 0x3fefabbf, "8dbdde53b38a43c84bf96cab8584cb88823b6142"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("256-v1.v1", 0x400000, 0x2c455f3a, "5a75b273b91eaa82d54c79bed0b1055e5446450f"),
                    rom("256-v2.v2", 0x400000, 0x7ef68eca, "cb4d96883bd8f8f6ec85e247429cdff6ed114550"),
                    rom("256-v3.v3", 0x400000, 0xa6db0fd6, "0ecb7ea62d3bc83d534687cadd2efe245eec5d41"),
                    rom("256-v4.v4", 0x400000, 0x37e358d4, "02bba2786a1e38beb8a6113a461ff2cf33554090"),
                ],
            ),
            none(),
            area(
                0x2000000,
                &[
                    rom("299-c1.c1", 0x400000, 0x091cbd0e, "ee6be4e50fe2a7cdb2e0bdd08215521316cb59ee"),
                    rom("299-c2.c2", 0x400000, 0x3c3f00d1, "934575912ea532e9a000a169531c04425f3aed73"),
                    rom("299-c3.c3", 0x400000, 0x29508ac8, "acc61a117381598037e41efbbe910546393e55c7"),
                    rom("299-c4.c4", 0x400000, 0x7980f723, "93b4e69fb1517a2ba6894817349e8f649f27bc52"),
                    rom("299-c5.c5", 0x400000, 0x9800e9ea, "8b89dd1267d8d7c4d2c254e721518a592167efcf"),
                    rom("299-c6.c6", 0x400000, 0x3096d29c, "9ac83573d9fc65c2d45ef9be75c7b21765487473"),
                    rom("299-c7.c7", 0x400000, 0xff7f42e2, "f61a18e6624368244803ba01ba5a3595a46cec62"),
                    rom("299-c8.c8", 0x400000, 0x193e3a2b, "f2a70b808bf83a3a055510de6f6d33d201c4b13f"),
                ],
            ),
        ],
    },
    Game {
        id: "ms5plus",
        parent: Some("mslug5"),
        name: "Metal Slug 5 Plus (bootleg)",
        manufacturer: "bootleg",
        year: 2003,
        genre: Genre::Action,
        screenshot: 98,
        recipe: Recipe::Ms5Plus,
        areas: [
            area(
                0x500000,
                &[
                    rom("ms5-p1p.bin", 0x100000, 0x7f2299fe, "64f650d3d278c9ed14797655c1ce2bd6fb48c704"),
                    rom("ms5-p2p.bin", 0x200000, 0x7553206a, "4609ebd6c99302030044506d56af63757f58e843"),
                    rom("ms5-p3p.bin", 0x200000, 0x678227e7, "7341f89a6fa6bd4c92b2316e5e7d41a66ceb4d87"),
                ],
            ),
            area(
                0x20000,
                &[
                    rom("ms5-s1p.bin", 0x20000, 0x382a6e85, "ef1fd3ce7ca36e64b5b977bfc20683288d5653dd"),
                ],
            ),
            area(
                0x80000,
                &[
                    rom("268-m1.m1", 0x80000, 0x38c90101, "86e6148560641043098470dcfc8223cfe774952f"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("268-v1c.v1", 0x800000, 0x1d72366a, "97e805eb5592d5e978b4b1e37f55ee45a323d9b8"),
                    rom("268-v2c.v2", 0x800000, 0x6eb6a75f, "c1a01607b61826f1a3acca3282f5212efc892e5b"),
                ],
            ),
            none(),
            area(
                0x4000000,
                &[
                    rom("268-c1.c1", 0x800000, 0xb915481b, "d4a407dd2b668f3cd07f03ac083cc195b4751141"),
                    rom("268-c2.c2", 0x800000, 0x1707c7cc, "3f14f972cb97372e305ae2343ac1320f1db997f3"),
                    rom("268-c3.c3", 0x800000, 0xafa4f1a1, "95ea4ca304c842351d1b7e3126091db4df60e2e2"),
                    rom("268-c4.c4", 0x800000, 0xde946567, "89df460a79efc72b25f3ed9d98d0f9ca5ee55330"),
                    rom("268-c5.c5", 0x800000, 0x0491a79a, "7b327345ab0c6aa2fb2a55cd90152c090b92e926"),
                    rom("268-c6.c6", 0x800000, 0x530baef5, "ed2381ba451f2b3c437abcb8604fb5f2c44f82e6"),
                    rom("268-c7.c7", 0x800000, 0x8cc84e39, "af0721b2d08bd1e0e96fceb9e6d275c6c37b6c71"),
                    rom("268-c8.c8", 0x800000, 0x066826eb, "f5c1b891540eb3715bcc6987e4a4708bc56e7482"),
                ],
            ),
        ],
    },
    Game {
        id: "garoubl",
        parent: Some("garou"),
        name: "Garou (bootleg)",
        manufacturer: "bootleg",
        year: 1999,
        genre: Genre::Fighting,
        screenshot: 38,
        recipe: Recipe::GarouBl,
        areas: [
            area(
                0x500000,
                &[
                    rom("garou-p1.bin", 0x100000, 0xe64a7ed3, "72e9d79ba58ba11f2f4a592008a8b6cddee00425"),
                    rom("garou-p2.bin", 0x400000, 0x62975b2b, "06091455a2f4e172ca1d06f4312ee6ff2c297407"),
                ],
            ),
            area(
                0x80000,
                &[
                    rom("garou-s1.bin", 0x80000, 0xf28f293e, "df38ea4aedc1485df21e0c3f92b175d1e6470dd4"),
                ],
            ),
            area(
                0x40000,
                &[
                    rom("garou-m1.bin", 0x40000, 0x6b404fa2, "7e25d20f819fea5fb4f25635d46a196b765f19ea"),
                ],
            ),
            area(
                0x1000000,
                &[
                    rom("garou-v1.bin", 0x400000, 0xa39601aa, "973b4b0e3b936cb7dfd22a323451fa496143eaf6"),
                    rom("garou-v2.bin", 0x400000, 0x8575795b, "9e4fa2634dc77e3633d0e89e5a25d502ab101c7c"),
                    rom("garou-v3.bin", 0x400000, 0xd2209fc3, "5081948a5eeadb43f60e685134f003f2110290fd"),
                    rom("garou-v4.bin", 0x400000, 0xacaea9b5, "ef4c29a3e0e7b8285d1de28cd793640a95c5bc96"),
                ],
            ),
            none(),
            area(
                0x1000000,
                &[
                    rom("garou-c1.bin", 0x200000, 0xd60d99ba, "75c16daa0764e0f710c89040db26b422b9b41b63"),
                    rom("garou-c2.bin", 0x200000, 0x19a72540, "0a46bfbfd2f0a6acc2f2683e1fd5077ebaafd06a"),
                    rom("garou-c3.bin", 0x200000, 0x2b20d40d, "98228422f6710d1de4496482bea4e04dc609a02b"),
                    rom("garou-c4.bin", 0x200000, 0x5a044815, "f59bcc85722348a89166f3dce2bcb10483442004"),
                    rom("garou-c5.bin", 0x200000, 0x3fe314f7, "667ec9dacb4223d1cd69264d33e58dc047c765dd"),
                    rom("garou-c6.bin", 0x200000, 0xa8df14e6, "8e6eb7cf3a1bd51840ec2d0dd6bc24dd5b22ee3a"),
                    rom("garou-c7.bin", 0x200000, 0x2140b559, "b3113d142fd6e4faf459157cd3b822bf02bb1d3d"),
                    rom("garou-c8.bin", 0x200000, 0x4478914e, "d51c4e037e520de5c2f3ed952ab07c4c0e051179"),
                ],
            ),
        ],
    },
    Game {
        id: "kf2k3pcb",
        parent: None,
        name: "The King of Fighters 2003 (PCB)",
        manufacturer: "SNK Playmore",
        year: 2003,
        genre: Genre::Fighting,
        screenshot: 66,
        recipe: Recipe::Unsupported,
        areas: [
            area(
                0x400000,
                &[
                    rom("271-p1.bin", 0x400000, 0x934b7168, "785e0deeeb29b7b4cc43995358e7a3bed16d949f"),
                ],
            ),
            none(),
            none(),
            none(),
            none(),
            none(),
        ],
    },
    Game {
        id: "kof10th",
        parent: Some("kof2002"),
        name: "KOF 10th Anniversary (bootleg)",
        manufacturer: "bootleg",
        year: 2002,
        genre: Genre::Fighting,
        screenshot: 62,
        recipe: Recipe::Unsupported,
        areas: [
            area(
                0x800000,
                &[
                    rom("kf10-p1.bin", 0x800000, 0xb5cc93c8, "4b736e705fd00ea078cc26f3fb0c197dcbbf53a4"),
                ],
            ),
            none(),
            none(),
            none(),
            none(),
            none(),
        ],
    },
];
