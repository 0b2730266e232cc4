//! Operator-level arithmetic vectors and algebraic laws.

use std::str::FromStr;

use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use mpa::{Integer, RandInteger};

fn int(s: &str) -> Integer {
    Integer::from_str(s).unwrap()
}

fn x1() -> Integer {
    int("0xab123567567adeeff143565756742")
}

fn x2() -> Integer {
    int("0x1234aeefdbba123231221")
}

fn x3() -> Integer {
    int("0xde")
}

#[test]
fn addition_vectors() {
    assert_eq!(&x1() + &x2(), int("0xab12356768af8ddfccfd688987963"));
    assert_eq!(
        int("-0x725154a39b3442a17a736a8d4ca728ae48e0b77a13f070eaa59ffa2d04")
            + int("0x14b737143e25d93660ed6f8dda4a59f44fc4ea841"),
        int("-0x725154a39b3442a17927f71c08c4cb1ae2d1e081364bcb4b60a3ab84c3")
    );
    assert_eq!(&x1() + &Integer::zero(), x1());
}

#[test]
fn subtraction_vectors() {
    assert_eq!(&x1() - &x2(), int("0xab123567444630001589442525521"));
    assert!((&x1() - &x1()).is_zero());
    assert!((&x2() - &x2()).is_zero());
    assert!((&x3() - &x3()).is_zero());
    // borrow propagation across a long run of zero limbs
    assert_eq!(
        int(concat!(
            "0x37d213e1476501c79731236054fddd8ebd7872b0046d01d1648a0efc6a3add5559",
            "542c09a02ed61c8489797be90965a0c9160872c7ff862dcd00865c3c6a6edab1ad14",
            "c5dcf04e124a3fb6cdf1ba9ccfa3ca3da5ce0ea2de7a61c6bc2872a659db49e4aee6",
            "0362e6a4fba2642c2d479e97074d47c297dea48af0870eb40702b9aae74904c2c232",
            "ce8"
        )) - int(concat!(
            "0x37d213e1476501bd1b464ae796b3db453a895d562e9d287180fb90ebaf90c0",
            "3f8608d8fd0ab4fc5fc468dab4b5cdc5df2fc2cb1c91e78808a4000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000"
        )),
        int(concat!(
            "0xa7bead878be4a024982ef1559d5cfd95fe38e7e10baaa1d15d34b530c9579d9bcc",
            "0209ec7333b9fc199533d563617fe252900865c3c6a6edab1ad14c5dcf04e124a3fb",
            "6cdf1ba9ccfa3ca3da5ce0ea2de7a61c6bc2872a659db49e4aee60362e6a4fba2642",
            "c2d479e97074d47c297dea48af0870eb40702b9aae74904c2c232ce8"
        ))
    );
}

#[test]
fn multiplication_vectors() {
    assert_eq!(
        &x1() * &x2(),
        int("0xc2a7c5ac63337f66e25d95378627825a8c7f66eb1796af382")
    );
    assert!((&x1() * &Integer::zero()).is_zero());
    assert!((&x2() * &Integer::zero()).is_zero());
    assert_eq!(
        int(concat!(
            "0x123413451345134513543415135413451345134513451345134513451345123123",
            "11233567678657895789578995789789deadead"
        )) * int(concat!(
            "0xdeadbad12343556375646784976789234820893459023458",
            "92345800345203459203594203495"
        )),
        int(concat!(
            "0xfd5832fa169c01eb16ed0d6c894aa4b6ef35aae11120c8374a1877525101934ab5",
            "606a9be865f2f93179b51beb369974dba9d9c9230d26b00a8bd1177ef55fe8ee1a34",
            "db26275af2743a96f97b5e207fde0fa8dd9c330788ebeb1"
        ))
    );
    // operands long enough to recurse past the schoolbook base case
    assert_eq!(
        int(concat!(
            "0xdeadbeefbadadadeeeaddaccb12341345134513451354341513541345134513451",
            "345134513451345134512312311233567678657895789578995789789deadeaddead",
            "bad12343556375646784976789234820893459023458923458003452034592035942",
            "03495adadadadadadeeefefefbadadadedad"
        )) * int(concat!(
            "0xdeadbad1234355637564678497678923482089345902345892345800345203",
            "459203594203495adadadadadadeeefefefbadadadedaddeadbeefbadadadeee",
            "addaccb123413451345134513543415135413451345134513451345134513451",
            "34512312311233567678657895789578995789789deadead"
        )),
        int(concat!(
            "0xc1b1c97e134a7207be51b9c69e47fd2f9f05532f0c1af67feaa98bfe863dd3c418",
            "8523f8c24dfef3064dadcf2ac8a63170d09eda40398826e7ef39e04c35a0887b0fb6",
            "ee5f1b7cfa9877f7916ea5007d915593cb2b17e9a4e284b4a819046d6fa483735627",
            "d220ffa5cb960b05f2ee8521fe2ffa876b4f3e6eb8c549af96de8a97fd982884ec73",
            "0b9b2775941b46b2b32cfb384219cd8ed2ecf5f8ec547cdffd77d1472a9dbae33ef4",
            "7716c59fecfef2cf593a3efbd3daed281e3df3ce6114c3f4e53bfef0d06db28c138d",
            "123a068ac33b10ec6812d97522ef850023ec8af45fc87d1c115caaa9591ad18bc7a3",
            "e9"
        ))
    );
}

#[test]
fn shifted_multiplication_vectors() {
    let one = Integer::one();
    assert_eq!(
        (&one << 1250) * (Integer::from(5u32) << 1000),
        int(concat!(
            "10386285306507684978916116673548282354283347549216353826038334983480",
            "27201818349942027387547467378873904592464517625786136825938489506205",
            "92755941557106829032084265303181935596507560999120425528567022380661",
            "23572162548750879051043747647080529772091348678096826144703259828444",
            "47784542971143877373701961751402593647945496679770694654679196072178",
            "02872556814026437164802552462840470678546798223064738515064877124832",
            "12368580011577701514625612479747067924533519120576415727619084496301",
            "05942259278332874668796346706653448200081400989389809848728879382742",
            "94460824212590209039628262379472087788409838407159209572950998901949",
            "019881910422809583427242154239313892345918998357290442046740365312",
            "0"
        ))
    );
    assert_eq!(
        (Integer::from(5u32) << 2330) * (Integer::from(5u32) << 2330),
        int(concat!(
            "15765937581418552934153156722051900011763197750935255435705560423710",
            "35962461446112200597963560972019693595259732637834136876740648523644",
            "22959413583946417243619734297193772034259220297265561881025792906389",
            "65082164798843098007647530064978179449819451335173188928904481339031",
            "41652143828294677160789455820984548005744282756046016010067933056711",
            "89392691549639441297068184624796295310460564520413301920705030928392",
            "45417204101241237787658404745521555677169420670925655747745430040179",
            "66155689409895690519382361476753369410927303819938251965864844960942",
            "73820483678459151726017378992212757939201535844586121099879466705333",
            "48428091631901159154126605846937015210566585913648531728423522313248",
            "63694875246053065288132087123580495502619780570781771769235447690016",
            "56436212444813495695199383619879949795453228217207588586606379358887",
            "60727042181905714167281579318375964424100821479660093919050876802673",
            "09010642239161437494089551746566388178230836650430341543298388773215",
            "04510169613041179627824850369661627758117344585454952398513078591012",
            "16177774460245792848745010610272632849144679399483969637136592772675",
            "30421574188119406015741463062685299233946273066607202191062843450759",
            "09189691913932415049831533576609434887106277641153470780262690056223",
            "60536271077885617790509297878092755218865744089197060800946484997385",
            "01745518501128178558848005710927956044510090930374814326926802000802",
            "052945569430779028887070667017196503721574400"
        ))
    );
}

#[test]
fn division_vectors() {
    assert_eq!(&x1() / &x2(), int("0x96582653d"));
    assert!((&x2() / &x1()).is_zero());
    assert_eq!(&(-x1()) / &x1(), -Integer::one());
    assert_eq!(&x1() % &x2(), int("0x5dfeca967ad3f6311065"));
}

#[test]
fn difference_of_squares_identities() {
    let x1 = x1();
    let x2 = x2();
    let x3 = x3();
    // (-a + b)(a + b) == -a^2 + b^2
    assert_eq!(
        (&(-&x1) + &x2) * (&x1 + &x2),
        &(-x1.pow(2)) + &(&x2 * &x2)
    );
    // -(-a + b + c)(a + b + c) == a^2 - (b + c)^2
    let b_plus_c = &x2 + &x3;
    assert_eq!(
        -((&(-&x1) + &b_plus_c) * (&x1 + &b_plus_c)),
        &x1.pow(2) - &b_plus_c.pow(2)
    );
}

#[test]
fn ring_laws_randomized() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    for round in 0..40 {
        let words = 1 + round % 9;
        let a = rng.gen_integer(words, round % 2 == 0);
        let b = rng.gen_integer(1 + round % 5, round % 3 == 0);
        let c = rng.gen_integer(1 + round % 7, round % 5 == 0);

        // associativity and commutativity
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        // distributivity
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        // identities
        assert!((&a - &a).is_zero());
        assert_eq!(&a + &Integer::zero(), a);
        assert!((&a * &Integer::zero()).is_zero());
        assert_eq!(&a * &Integer::one(), a);
        assert_eq!(&a * &a, a.pow(2));
        // (a + b)(a - b) == a^2 - b^2
        assert_eq!(
            (&a + &b) * (&a - &b),
            &a.pow(2) - &b.pow(2)
        );
    }
}

#[test]
fn division_laws_randomized() {
    let mut rng = XorShiftRng::from_seed([7u8; 16]);
    for round in 0..60 {
        let a = rng.gen_integer(1 + round % 10, round % 2 == 0);
        let b = rng.gen_integer(1 + round % 4, round % 3 == 0);
        let q = &a / &b;
        let r = &a % &b;
        // the remainder convention: always in [0, |b|)
        assert!(!r.is_negative(), "a = {a}, b = {b}");
        assert!(r < b.abs(), "a = {a}, b = {b}");
        if !a.is_negative() {
            // for non-negative dividends / and % pair up exactly
            assert_eq!(&(&q * &b) + &r, a, "a = {a}, b = {b}");
        } else if !r.is_zero() {
            // for negative dividends the remainder is |b| - (|a| mod |b|)
            assert_eq!(&r + &(a.abs() % b.abs()), b.abs(), "a = {a}, b = {b}");
        } else {
            assert_eq!(&q * &b, a, "a = {a}, b = {b}");
        }
    }
}

#[test]
fn shift_round_trips_randomized() {
    let mut rng = XorShiftRng::from_seed([9u8; 16]);
    for round in 0..30 {
        let x = rng.gen_integer(1 + round % 6, round % 2 == 0);
        for shift in [1usize, 7, 63, 64, 65, 129, 1000] {
            assert_eq!(&(&x << shift) >> shift, x, "shift = {shift}");
        }
    }
}

#[test]
fn bitwise_tables() {
    let x = int("0xabdeaf1234355512313123a");
    let y = int("0xabdeadeeeeeeeeeeeeeee");
    let z = int("0xfffffffffffffffffffff");
    let w = int("0xabdeaf1aaa35551231312");
    assert_eq!(&x | &y, int("0xabffffbffefffffeffffefe"));
    assert_eq!(&x | &z, int("0xabfffffffffffffffffffff"));
    assert_eq!(&x | &w, int("0xabffffbf3ebf7557333133a"));
    assert_eq!(&y | &z, int("0xfffffffffffffffffffff"));
    assert_eq!(&y | &w, int("0xabdeaffeeefffffeffffe"));
    assert_eq!(&z | &w, int("0xfffffffffffffffffffff"));
    assert_eq!(&x & &y, int("0x8a8e0024244402202022a"));
    assert_eq!(&x & &z, int("0xdeaf1234355512313123a"));
    assert_eq!(&x & &w, int("0x8a8e02102015101031212"));
    assert_eq!(&y & &z, int("0xabdeadeeeeeeeeeeeeeee"));
    assert_eq!(&y & &w, int("0xabdead0aaa24440220202"));
    assert_eq!(&z & &w, int("0xabdeaf1aaa35551231312"));
    assert_eq!(&x ^ &y, int("0xab7571bfdadbbbfcdfdfcd4"));
    assert_eq!(&x ^ &z, int("0xab2150edcbcaaaedcecedc5"));
    assert_eq!(&x ^ &w, int("0xab7571bd2e9f60472300128"));
    assert_eq!(&y ^ &z, int("0x542152111111111111111"));
    assert_eq!(&y ^ &w, int("0x2f444dbbbfcdfdfc"));
    assert_eq!(&z ^ &w, int("0x542150e555caaaedceced"));
}
