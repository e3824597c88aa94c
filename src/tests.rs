use crate::{Alphabet, AlphabetRegistry, CustomAlphabet, EncodeSettings, Scheme, decode, encode};

fn get_scheme(name: &str) -> Scheme {
    let config = AlphabetRegistry::load_default().unwrap();
    config.get_alphabet(name).unwrap().scheme().unwrap()
}

fn custom(chars: &str) -> Alphabet {
    Alphabet::Custom(CustomAlphabet::from_chars(chars).unwrap())
}

const SAMPLES: [&[u8]; 7] = [
    b"",
    &[0],
    &[0, 0, 0, 1, 2, 3],
    b"Hello, World!",
    &[0, 1, 2, 3, 255, 254, 253],
    &[255; 17],
    b"Decentralize everything!!",
];

#[test]
fn test_encode_decode_empty() {
    for alphabet in [Alphabet::StandardBase32, Alphabet::Octal, custom("ab")] {
        assert_eq!(encode(b"", &alphabet), "");
        assert_eq!(decode("", &alphabet).unwrap(), b"");
    }
}

#[test]
fn test_fixed_alphabets_round_trip() {
    for alphabet in [
        Alphabet::StandardBase32,
        Alphabet::HexBase32,
        Alphabet::ZBase32,
        Alphabet::Octal,
    ] {
        for data in SAMPLES {
            let encoded = encode(data, &alphabet);
            assert_eq!(encoded.len() % 8, 0, "{:?}", alphabet);
            assert_eq!(decode(&encoded, &alphabet).unwrap(), data, "{:?}", alphabet);
        }
    }
}

#[test]
fn test_top_level_matches_scheme_modules() {
    assert_eq!(encode(b"foobar", &Alphabet::StandardBase32), "MZXW6YTBOI======");
    assert_eq!(encode(b"yes mani !", &Alphabet::HexBase32), "F5IN683DC5N6I811");
    assert_eq!(encode(b"yes mani !", &Alphabet::ZBase32), "xf1zgedpcfzg1ebb");
    assert_eq!(
        encode(b"yes mani !", &Alphabet::Octal),
        "362625631006654133464440102====="
    );
}

#[test]
fn test_custom_alphabet_uses_radix() {
    let btc = custom("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
    assert_eq!(encode(b"\0yes mani !", &btc), "17paNL19xttacUY");
    assert_eq!(decode("17paNL19xttacUY", &btc).unwrap(), b"\0yes mani !");

    for data in SAMPLES {
        let encoded = encode(data, &btc);
        assert_eq!(decode(&encoded, &btc).unwrap(), data);
    }
}

#[test]
fn test_custom_hex_uses_single_leaders() {
    // A plain alphabet does not know about hex byte pairs
    let hex = custom("0123456789abcdef");
    assert_eq!(encode(&[0, 0x0a], &hex), "0a");
    assert_eq!(decode("0a", &hex).unwrap(), vec![0, 0x0a]);
}

#[test]
fn test_registry_schemes_round_trip() {
    let config = AlphabetRegistry::load_default().unwrap();
    let settings = [
        EncodeSettings::default(),
        EncodeSettings {
            pad: false,
            lowercase: true,
        },
    ];
    for name in config.names() {
        let scheme = get_scheme(name);
        for settings in settings {
            for data in SAMPLES {
                let encoded = scheme.encode(data, settings);
                assert_eq!(scheme.decode(&encoded).unwrap(), data, "{} {:?}", name, settings);
            }
        }
    }
}

#[test]
fn test_cross_scheme_fixtures() {
    let cases = [
        ("base2", "01111001011001010111001100100000011011010110000101101110011010010010000000100001"),
        ("base8", "362625631006654133464440102====="),
        ("base10", "573277761329450583662625"),
        ("base16", "796573206d616e692021"),
        ("base16upper", "796573206D616E692021"),
        ("base32", "PFSXGIDNMFXGSIBB"),
        ("base32hex", "F5IN683DC5N6I811"),
        ("zbase32", "XF1ZGEDPCFZG1EBB"),
        ("base36", "2lcpzo5yikidynfl"),
        ("base58btc", "7paNL19xttacUY"),
        ("base58flickr", "7Pznk19XTTzBtx"),
        ("base64", "eWVzIG1hbmkgIQ=="),
        ("base64url", "eWVzIG1hbmkgIQ=="),
    ];
    for (name, expected) in cases {
        let scheme = get_scheme(name);
        assert_eq!(scheme.encode(b"yes mani !", EncodeSettings::default()), expected, "{}", name);
        assert_eq!(scheme.decode(expected).unwrap(), b"yes mani !", "{}", name);
    }
}

#[test]
fn test_errors_surface_through_dispatch() {
    assert!(decode("MZXW6YT!", &Alphabet::StandardBase32).is_err());
    assert!(decode("MZ======", &Alphabet::StandardBase32).is_err());
    assert!(decode("9", &Alphabet::Octal).is_err());
    assert!(decode("c", &custom("ab")).is_err());
    assert!(get_scheme("base2").decode("012").is_err());
    assert!(get_scheme("base64").decode("!!!!").is_err());
}
