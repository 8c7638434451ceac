//! Constant tables for `zkhash/poseidon-bn254-t3-a5/v1`.
//!
//! Values are big-endian hex. Round constant `k = round * WIDTH + i` is
//! `SHA3-256(id || "/rc" || u32_be(k)) mod p`; the MDS matrix is the Cauchy
//! matrix `1 / (i + j + WIDTH)`. Both are re-derived in `params::tests`.

use super::params::{NUM_ROUNDS, WIDTH};

pub(crate) const MDS_MATRIX: [[&str; WIDTH]; WIDTH] = [
    [
        "2042def740cbc01bd03583cf0100e59370229adafbd0f5b62d414e62a0000001",
        "244b3ad628e5381f4a3c3448e1210245de26ee365b4b146cf2e9782ef4000001",
        "135b52945a13d9aa49b9b57c33cd568ba9ae5ce9ca4a2d06e7f3fbd4c6666667",
    ],
    [
        "244b3ad628e5381f4a3c3448e1210245de26ee365b4b146cf2e9782ef4000001",
        "135b52945a13d9aa49b9b57c33cd568ba9ae5ce9ca4a2d06e7f3fbd4c6666667",
        "285396b510feb022c442e4c2c1411ef84c2b4191bac53323b891a1fb48000001",
    ],
    [
        "135b52945a13d9aa49b9b57c33cd568ba9ae5ce9ca4a2d06e7f3fbd4c6666667",
        "285396b510feb022c442e4c2c1411ef84c2b4191bac53323b891a1fb48000001",
        "06e9c21069503b73ac9dc0d0edede80d4ee2d80a5a8834a709b290cbfdb6db6e",
    ],
];

pub(crate) const ROUND_CONSTANTS: [[&str; WIDTH]; NUM_ROUNDS] = [
    [
        "160866c51d4bf9779ac5e562454edce1e74171da013130ff43751610e32c5733",
        "08362b5a1d15413cf6f6fa3fccf05fe9b6c5cfcc841765924de4269fa8ae51c7",
        "1fbe27ade109c9fc527e2a4cbbb98945c5ddd7f29140a4069ce0b4c14e7e84b7",
    ],
    [
        "28e92a39c1cf5b670aaabcdbfe84fd00d38057e22716524f059c3cb948bcd96d",
        "0130467d8f58c927c752a1bdd59230313efbb517a52dc3dff644db1addfd3dfd",
        "018c0dfcc8c15ab2429311345372649c538e6812dea7fcfb6d7367da051246c9",
    ],
    [
        "2750e6b12516d68b798fc30df24d036599c82d74b375edbb955223a16170870c",
        "1e2eed3c951f4fc59ff7cffa6e30f64a34ad613762ae7a354ca17e78335bf251",
        "1d2584d47e29cf2de5915e1f9f79f7baf6510b06c821605c6d7ea4f3b6a58bca",
    ],
    [
        "29ca51582106e1cdda2a1515b92a170b42b3d5195f51b850359435ca3b08dd04",
        "218d0c6dedfc54b164de3f4a6cec3b63efe11534350e10849388b15b7369b231",
        "2b14149f7baede824fe42ac70f21300aa0cb8702880ed19baa02ebcdccb0d76a",
    ],
    [
        "2a64dfe3372b880e476abf298d6756baedd3fc3f6b7e67099a86929522a89fb1",
        "170e6c5e70bcdd7f42548482860ed71b98ddf3b16cb1f5acea2b89af22f1e44a",
        "103299acff2207718ca26b40d6cbed6b65b3726b8ab8e903c4900b12c0d45e47",
    ],
    [
        "2a94676fbf9a0059f4f27aef5f4c37dcc7d76c68a5f688bf59298d0d3c57840a",
        "05e8fafe4cd66d7c11213896ef3895dda80bddc4a5dfe2bac24afab750db9750",
        "2149d9bd9880288b49c5d5b6d84544ab44e22747c7f18569731ca7610ec787bd",
    ],
    [
        "01f2499c7f0f4e4aab0ea3178b487ff43f61aaffc85940d2f968d365bce291da",
        "2cb9f3c621e30ef3d7b52a278dc14e0de20048c6c47658a77afbf69332ad128e",
        "0faedd7bae17fb004a0fa7925752ed53b2490ba25c4364ff7b10e1b07e22b02b",
    ],
    [
        "24c86e5362566253d493fa61214d2b7b740df329ee6179bcdd33c07e6fee2634",
        "270c400e4f1459b1913cdd14c3190066f3e07cea079cbde73bcb5ff960a6427f",
        "276051860a76dbaddf38c41dfcff515aec2d7b78011a71f0b7bbe839c5c3afce",
    ],
    [
        "073ff1bfd2a6fde3c0a7193aa1d9c262a46044577fed1ddfc1d76eaeed321c3b",
        "24e9e6f6a9123207e1d3a22aee38d4d267a54d0336190c12d42bf89f35b7f171",
        "0d59666b13c26ddc45afcdfdf7f2fa0b761f6516bd3d77f9b376f4a7ceee5814",
    ],
    [
        "093f09880ccc474b67b76d8575f46f1af58b9b26e6c75e1398e430213b12e0b4",
        "079f2f713b067a923f03c1ad995ba3d44801d43414414335e43f235224864d29",
        "0e1f5d5cf3f2fba52a8f2190fae114e21d84d99a650f9b3f1d23e0e92935719d",
    ],
    [
        "01bce05d0588e8cca51d555bedc76cc3dbecb28e3fff9ba6b2dba90753343bae",
        "2d9892f3b38cc12a532da4fabfca09db06332ea00fef3df6445aaf9f66ae25c4",
        "196db9e14e5bbbdb9e03310227d629ae1a29cf6ba55d9c8ea1b20b08540f7b68",
    ],
    [
        "24c4d4b81de1862325ff60caad6ee7c287e77efc902a586fc24dc2f22b7bccd4",
        "06b722d05f81f7c2f1a34f64b95e9bba8527160402ebe19361f803f4b7e8292a",
        "06dfb3064294ac51bcbb00a817783035259b3a1183ff3ecf57022b418eebf482",
    ],
    [
        "1d25cb7f268ea0717e59b06a80b56bdc0e6d79bca6aa150aafef0ba2f682b5ca",
        "16aad65e027d6c4c910867765e0532cd7287fb51df946ab22b8ba3fc267585e0",
        "0fa778bc18edae0b04a3b720b673b023f8c9cfd9653e2440a28e3c29510dea8e",
    ],
    [
        "1ee3605fc79c99c2d8ebe47e648962a2b8ec85bd78b9aaa6f25a772c958610b7",
        "02388068888f74b271bc0d7d0767d3a79ad73d5cff10dd35e17626cfa18cb352",
        "0c8a15930139f43ab2911c326ddeb421279af0f460bbdd633c2c8465883bac80",
    ],
    [
        "1721a7c7c9a11d19e341c263d03d759e6c3070bef02877c8dfd70986ea98e160",
        "151fea177726deb9aa785dbf74260d97148de127db78f661002eeaf605b2e836",
        "01845e5be4c6f17b3f6b389d7d659d7f3dab3a74f7738e80825c2393ba768cb9",
    ],
    [
        "20ce09ca1a7f0ab38d1b578e3df080a22f49439771ce001c414a643097fab658",
        "2947641a6877ddd2c7ff629da6614326cfeceed9101273d4de1a4d275cc83221",
        "11a3406ba16ebdfa3789c0dfd894fd2212f3dda717c7c3ebd5e5e91ba90fd4e0",
    ],
    [
        "2dbb89c2c728c17399c5cb0a1d3ed6222b2b297028cabed6374118fe4d258ee3",
        "298b6490e5131689089fabe99cb28f955e47d3d02a3813cb613ed5ce9018255d",
        "0d7c09e58d95ff027e635783c5a5df788e530e0f9d0c553b598089272ffd540d",
    ],
    [
        "03e2cc1087266b8c2125fdea9f7709af1d16e1dc571d75b3affb3d383e13e618",
        "0ec780057c27af98828513bb3ee52bb4d7d22ab628155824d17e2c1ed5fd99ed",
        "2b0de56a50480bf294858cf712244958ca2e4f4ef6bc1aa79144edec0b61a092",
    ],
    [
        "0ead2e91b256560b151383d2611548a576e48b131def1261020869552577dc41",
        "032f92538382ced70e8bfaf733df025c3b2450711f5cee9f9e7d6b3381650e26",
        "1c6bc576e90ce27f7bb1d3565ef33e75b44a1395ef8d674e05852a72de6f3030",
    ],
    [
        "2650477fbf7496a5fee9f3b7e4d97adce1659f1044d4cf40cebcd3ddf30fdb69",
        "18e8a610d2948ff7207ad2cd9811dd961cc486f697651026b2f60b729d45fc20",
        "2b408f4faaeb8aa1c744efc652ae9e0c4437493497bf5dfd4ae73d5ba5cdffd9",
    ],
    [
        "060f0e37760cdb3f83c5f65a4e0edbf000706ce811c68374096479616537c538",
        "0b38697706f807b40ec95868272af397ceeef35fa4223f17a190ad94e2eb08df",
        "0462d8756998927bad962046b8bc8a82a3eb64a43f02a59d89b867971084ce36",
    ],
    [
        "09a45d267114771f9f8f3781f478aaf14410bb3827303944a0839dd018b50fcf",
        "064271f0eabff182f809fce96ded0f2a333943d87ac00306b70209535ca05fae",
        "2dd83c35cf74d9bdd8633e25de95ff823e32f3fc2ad13d207726c2c4d491f20c",
    ],
    [
        "24c434252083287a82e49fa7994d866e98ee7bedd6ae9e6b06b38245ea6baa31",
        "281904b7d9aee4122465827d4a85a0a45885abc205821742a17a80b7529b7f14",
        "24944525bc227aa48e988f439355d3a3196edf27888f407118b3d03491073aac",
    ],
    [
        "06e34fa1adcd937c16e5c0431ffce631167f4ff93651a7a9641abe58e0e0117b",
        "1806bfb1fa9e147ee0430e9a72951d018aca4cf75dad6ed419b58de1262a54ad",
        "15f63a568200e802c31ca1b2490fa950655fbb0b8a7d8b953cb23c8ee01b4b39",
    ],
    [
        "09e3ee0592934e86ee208ea0c786ca485401533a6dbe23dc0ccd4a6988fa4228",
        "22e287c6c07c9368d951bbe292a46cb7c026ad2f1a3910adc36edb9e6e77a019",
        "0e06d65338d93515d2df4eaf5e84a164dfbadcac17c12e29a84bc097ffc05dfa",
    ],
    [
        "1348174aeed6092a4fbceffa481be8d22546925b97a609f34dba8bb392164758",
        "256c96b13b372ab5787edb54bcf58d2585702bc45bfa18734ebb1ef0fb7e343c",
        "1e8ab713ddc6b646b484cb1a6cb50d889c21c2169f3dc1e3d66fca77e93a61b2",
    ],
    [
        "2d9d7ce7193c0d0f3cee5b6d00f01a08a4a68d89bc3521b855f646219cbe2118",
        "0659d6a3ddf816f29b0bdba867357db12d32821ecf78a6a00fb65d7b98d54ab6",
        "26a901bfaa1c576cc098648636c36d1054c6ab9955ca4ab00fdc9b3144e99e86",
    ],
    [
        "18d3132a2a3b9261e6b1f1bc24b9b46c264c25a7fb6579fd31cb85fdff580157",
        "2523aa653a335a2df11344653d760f1571b5b0f105a86ecf620e47dd12d2b632",
        "13d3f0506a3f89470eaf80f3ad1e0541a3ea8982f65d080527323064f2a66327",
    ],
    [
        "1aae892becc2063edfb0ce8033476f4cbbe5be9b83f75a22a066649b109eb90a",
        "1cbfdf2fab4c5e78da7120311066226d462fc2671997721c35bf9800d7e4d9fc",
        "066dc12f4333d2ed798dbeb7188f30bf1bb65f8cae12f2e2680e3e4e640c63f8",
    ],
    [
        "031c8f10ea3c6419a69d8128f6d757594a15edbc1b1642f97542badda0a60b27",
        "1556b0f32741d02dd576742b0a3a7923fed80e5bfca0e9e9019c50959987f05c",
        "16f46b7e72da7574c254ec025f92efd9a3941f11b23d5bc06c09843fe4bdabcb",
    ],
    [
        "239db53c024123dddf15fd1ec9f94e41567912e928e182c8f22c927a360893e8",
        "0776ba1f48ed21bb345a90f349027db21361ef19662503d04fa7ca50707b784e",
        "29ddf24906bcac0a0d7e9695fbc824cdabf10b662d2e2682b39e79098fa7a68b",
    ],
    [
        "2644cdf44fb8c6c26d0b53d3d620555eac6361b527ff5f3e9ec3294416737bcf",
        "0a4b1e2109e3003d654d373fbeab78abbe6b22f74c73e7be17fc8d8bde3aafda",
        "02f21de7a19ed94debf2263155e38535e80f3118ca52cad0438772f753f70b37",
    ],
    [
        "1b0a49eab28f5b868925bbd3cb37c4c31cc52b928d28802e2b5e2b6ba1e2e226",
        "25e4afdb25c4b94d5f3a82612bb944cd495925c4eb6f6acb0990937167535eba",
        "26aca1dea914f089677eea8390c841282bb07cf396f3749298b7c34b21705ec6",
    ],
    [
        "1fdeb9a777f92cd7f696180156cd52b86d457736f79156cc7175b03af61ebe1a",
        "2a9c3dc6d71c0888634e0d1367fcaff6511faa2b1fb8a5885b63c294bfeca85a",
        "1a555d390c1206ca309cee290a2c72ffe1f99b25128fde9f8d57fcc8531b82a3",
    ],
    [
        "22ecb9b092a0109088e7fd030933fa07a2d230a7660791994f5a5fc6cd4d07ad",
        "0cc56d02f47633b49ff5da33cec8e1a8e80727bab09f58d966ce882c84a6997e",
        "1f85a60c6a36143c37ae8b2eff234fa7758b7d440b490dcd1e68b6ef1a98c1e7",
    ],
    [
        "19e9f05c6f49575b2ffa5244306ac9cc8cc9ecfd77361b3546cc25ac09fa8875",
        "272214ad78a60f29c58630100cfa6121129d75e023e0ad82278c0653b45f2d1e",
        "298a93948fe114bb7b2a2dbd040da65e747e161be35ff4a6d5ccd8a1fcf9bb5b",
    ],
    [
        "1fb76caf81b80685a1bc1fc6f248864733bc264f0f35ff3e194010e9bb8476ec",
        "12d4deae8eb685904a299563672bfcea71e13f173451108659d43754ee004458",
        "2bda6488e7ca2cc7e91e3c1221a2665098fb9680c2aa888ffbfe3bad4c5595dc",
    ],
    [
        "0a793b3593caef0b1b7a8fca51a5f062cd1279651a006f310c3e4ae39c7d5f5d",
        "086bad99880edfec69076787fbf077466ab504aad185f2777b308939d56e5472",
        "286f11e280da381c8277b10f95c2312b428fb81cbece72206005856f5bd862a1",
    ],
    [
        "1abb03ed0dee7c6224a099aad8badcea1f76e5b692124d39dbbe83e0ffffa080",
        "10b2f3366b0ae339f11ef95a8932d2174b30ea16e4ddbfbb3672d53a15947151",
        "03a5203bd0f433f00e0122b9981fe9d88b974f21dfabd06693194c2d9670e7b1",
    ],
    [
        "0bc4403608f8609ab832b2c593f6a213d00e380141b2315c485be2e0fbaada1b",
        "09267d3b3b2040880b1d795fb91fb86e181545757cd865e68226a0cb06d2a9f1",
        "151fe534b3d4c69eedb62fb82d1583aa7b0d04d70a3e925beefff626b3e00913",
    ],
    [
        "206a43c78396386ec784b0315a1e89369a7a161bdffb29bf0e17d53ba5bfacee",
        "2bc860eb50aec4def8253477aac20e5301cc6d87210960def4aba4692977a4ed",
        "2e2e00bf83f18dc245ed7358d7cf943b2cc326e8f76caefb3291be8d2665bc84",
    ],
    [
        "02c5fd6777f037782fbc9f13a16695667cd731b91c951c3905babc3009183fae",
        "2b59667f52e0528a59e39d0875e8b6f34af4f8b51066c9bfe0309540157ea376",
        "287b75be9371d359f4c27aaadc3f6286dc75b9da5b9f015589b5af79a20bf70f",
    ],
    [
        "1acf617dd1ee0f8e01d42a921811f8830504ce90031c1dc85e4aca9addf19836",
        "0ca4d42e12eda8c06f03e3570159ceee7cde13ce2e81c725ab64f2f80d790f88",
        "13e5a6674ee9afd85237b1388ee8c96fa97e1b38a271e04380319be6455d5309",
    ],
    [
        "0c40bd4946cf0d8d80fe558da4f0ab60b2482373a42362588b3338cd19d58db7",
        "0381517c37862bc95dd8a6333834bd3d3f924b3a8a6b5ccf691328feb0d7a5f7",
        "068518b76cc7360213d3751f3b4ae623acc4d5f5ad467121c6a25b822a03209f",
    ],
    [
        "19b81a7c47c8d8ac84c0de01f72beb75fa2681095ebe783f5c27c74d03c9190c",
        "2683254a744f296abc4620aae81864bc82333c1fe6dcccd4a6f1558c86feea7c",
        "053f57736056984f55d694e8778ce52f96576db68f967f51f9314a82a105d21b",
    ],
    [
        "184ddfd549f21e296a9fefe56d5e36bfe163a7620274a2722a1fa11315215f6a",
        "253e144aef6942d1cdc74ff1aa5089848c8a3b8cfdd30aabddf3bd76d32113d0",
        "2e68338860f6d4b1baf42aa6d059f8e15c5d5f72908b3c6f35ea6c2c662030b8",
    ],
    [
        "2b26b4aa7a643db6154b5cbf7f303b6a1b05bc4615ebb7f1d304615aec6bdf6b",
        "01de3b96039ead3f3e7ec9bde8f192d286eb1e491d4fa5023b464f15c3b75b65",
        "275f1033c940a6601037c9288294740386167672018d0cfc92ccd1dbb7b162dc",
    ],
    [
        "01f9d69d01127e4b655c08105ca36b3911b1182b4745de65c23b3d473d6da26e",
        "28925e976394cc7d98ca1b9783f10765964c317102f9ba8fee3329ef24375ea7",
        "2961a5743a15658f295354604d33c210235b5c750212356fe5dd27e987545545",
    ],
    [
        "0a1b69eb2fb5ce1d3d9b3b0e3903afc29cf5af5aa16552523719750448ac4ee2",
        "2f2c276be4bc517bc952ffdb8c25cf1be1454ea8430f641f8dcee49ff31e13f7",
        "1d863c723b55c1c01749f164f9441d1205ca1b55746d98510be133d3a01e1ecd",
    ],
    [
        "2c76d8208186167588e7e544638ad395b5be00d4aefed8605a145be68e6b3094",
        "0cfdfb14c7580ed5a95eee4ea9027c3ec9b4d3d399f3ac45067dcadc380ef46d",
        "1c876354ecadedf46ed50db2bde80072ac298187bd01685bff40a842fa182eee",
    ],
    [
        "072903a0d691e39df75c410d53040630758b36b83d6d6f3c89f90520dc6b21bb",
        "2cc1978b0142bf9a291a8109eef9b55ce587b74a220cb1b9c1c3d3f34b71ff08",
        "1e437ea5869850d2feccad65a364e64e3af43e8b0c4b39ba6655e6d92b407b4e",
    ],
    [
        "0685b113b3b8d61682fa3f59864dd52788c22c642abfc2309a1c2b703f6055f1",
        "06e9083207115ddc5182446b995c10bf8854e8d0f23f635e8d091030710e3bd6",
        "2b6f0061137dd3b31775c4f30cd0ea5eef111bb402c50c2a35ac75cff70e4119",
    ],
    [
        "0af0e20df296a9e24b56d024e4827d61d44a830cfa993e62239eb2958d1fb7c5",
        "292ec85bd7328d9960d02180f9eb959467709a2784d6f4760e824a5a38b2b4a4",
        "0de03b3bb674603277d6544b73635ef2299976ed0f3a4c8fe0aa0ac80874e440",
    ],
    [
        "1c1176051f34d56c7d022fed8755fbdd8dccf65f6bf200f35c7c8b3832625ce9",
        "0b21a4ca6a60c905d23c7cf2cb9c8ace9bc52b656c8eefd5ca609a7dac569766",
        "0f17aae4db40892f6a6b871e750b2444045f88b570fe4bef49ca7d2488470631",
    ],
    [
        "00b1fcb2493558fd773befd77cdb196861ade037db970aebd96c2cfb8dc5c620",
        "0398165c3784c94278f3dd013a5e939b519becd53c80a74d0c91158059d1de0f",
        "29a30d7c20fdb7b2b81164040fc9bac1ffeb94d44d5f5b2123f800744c729952",
    ],
    [
        "0f14c5207f9b20290889472bd889543eb6b47c3dc272455e2bcdc9a8736a79a7",
        "23dac611197331b301d6626484ddb5d37b5ecf661886fd96e8fd28955be8744c",
        "0562a29fe37bd3f8ace60ac0a9be9c9e59265fa4356b2cbdcddd77ebeaa2a8e0",
    ],
    [
        "181fa0dfaa026a7a4240f9bfe290ec297641e464db7d7b769391004dbdd5b140",
        "27774527074b438c5590901f3e3650850c59a02a4422f3cb80d5355855826880",
        "2054470fae3ac64d58feeafc41a023eeafd2bde3db45272ebd7407423e62e6a3",
    ],
    [
        "041d4ce771d6371139bfea3138b78c6816ec39c77f2bec85fa16768f0687eb38",
        "09bd20938ac4fe0748b991f81a111c9bc22aafcb55f92ed2d32900a7990ef0e1",
        "2903c65d95db63d5d35ba5d0275fba282e505bae341311c4e496c37fa30dd4fa",
    ],
    [
        "1c7de45e339c591bba3755514e7d9d7a3ca45e767a032ab8c49fd5a5a6d5643b",
        "1e3be94e8004ae9b546493d72723b732e623ed85de04425f53ba2f75ddee1a02",
        "2c264e7b87101de4921c6ee2576c569de81af49fe17bc33693947f923362cdc6",
    ],
    [
        "0c0e22b8487563f3a021f117eaac8d858943629c9fd46f7e4f3e87727f1f9d15",
        "1c5d817901a17cd6128651244e7c8370c778c2c3ef54df0809fb70f21cea24d1",
        "1e86f44b1fcfe52bc72c1470ab22eac1f7d0171e3cc6f0231eef3994721a52f3",
    ],
    [
        "0ba591e68010607c4f8535255f12571901a67e5fc2cb736b2c1968ba91b6c983",
        "1f4d9a672adfec1a019ee4e2606cc00539154f646a9c196be9cc181973c13ccd",
        "14d7b102e9941e551ad7e55a9c6e5eef4d758543ecc98c96bee9f24d5a7ae570",
    ],
    [
        "01c3b64ccc6cb8a60ec3a5e0e9f9e8bbec768d40e40e5099a1459710b4752c19",
        "1a979efc838cc1e67b8c40a3e1dd6caa9ffabc15f926b22651b968b58996c265",
        "17695555d9fa85db65dd174d232b9ce0b7cdd922ac0f718db0ffe27c5f2f5445",
    ],
    [
        "249001953dec21f8c2461460f52dee808af34e013f2d2dbf162de368c219c6d6",
        "1806a0cf888cd8c39a4c529770af84c89d600e127ec6fbfca273dbbdeb20932c",
        "132bd9102984b1509924994e7f5eae873309960f595e7701a546a2c03ca1cb8a",
    ],
    [
        "02e4505aca605cb70f80fe4b8c40093ac613cca7d4d8474fc97186ca6908d733",
        "17bf2e22000831525101fde2b17ef21cf9016d8c48319f7a86766f0bcd31020b",
        "21cbcaea074d15460e3fda814dae364748451e42f7f0ed9a2827f8462d8d4f04",
    ],
    [
        "08854fc4b02c58e21e826e4e5a9520ab9f4c9f2243f7301227767dbf7767efbb",
        "0a597e23ce69124fb0803de882b8a67a1219e721e3ca4d84862110128c6048e5",
        "1bf3a46cef0897838fdc661303d15518d7e1570a33d9ec48d78cb6c781c3108c",
    ],
];
