use gg20_tss::bigint;
use num_bigint::BigUint;

fn biguint(s: &str) -> BigUint {
    s.parse().unwrap()
}

#[test]
fn modular_inverse_matches_small_reference() {
    let result = bigint::mod_inverse(&BigUint::from(15u32), &BigUint::from(26u32)).unwrap();
    assert_eq!(result, BigUint::from(7u32));
}

#[test]
fn modular_inverse_matches_large_reference_pair_one() {
    let n = biguint("102112097946582615631136147902109156622653898419035298906688331069201061233983");
    let p = biguint("115792089237316195423570985008687907852837564279074904382605163141518161494337");
    let expected = biguint("25474184976837862363894976995466454035326651076879946883050318548976065133305");

    assert_eq!(bigint::mod_inverse(&n, &p).unwrap(), expected);
}

#[test]
fn modular_inverse_matches_large_reference_pair_two() {
    let n = biguint("2592341508477388788338039875332086003935577462794292637336102309357423871672");
    let p = biguint("115792089237316195423570985008687907852837564279074904382605163141518161494337");
    let expected = biguint("77350129032275108437581484883529059659442577067104103137820664936133073361349");

    assert_eq!(bigint::mod_inverse(&n, &p).unwrap(), expected);
}

#[test]
fn modular_inverse_rejects_non_coprime_inputs() {
    let result = bigint::mod_inverse(&BigUint::from(4u32), &BigUint::from(8u32));
    assert!(result.is_err());
}

#[test]
fn modular_sqrt_matches_reference() {
    let sqrt = bigint::mod_sqrt(&BigUint::from(223u32), &BigUint::from(17u32)).unwrap();
    assert_eq!(sqrt, BigUint::from(6u32));
}

#[test]
fn modular_sqrt_of_zero_is_zero() {
    let sqrt = bigint::mod_sqrt(&BigUint::from(0u32), &BigUint::from(17u32)).unwrap();
    assert_eq!(sqrt, BigUint::from(0u32));
}

#[test]
fn modular_sqrt_rejects_non_residues() {
    // 223 mod 17 == 18 mod 17 == 1... pick a genuine non-residue instead.
    assert!(bigint::mod_sqrt(&BigUint::from(5u32), &BigUint::from(17u32)).is_none());
}

#[test]
fn mod_pow_matches_manual_exponentiation() {
    let base = BigUint::from(4u32);
    let exp = BigUint::from(13u32);
    let modulus = BigUint::from(497u32);
    assert_eq!(bigint::mod_pow(&base, &exp, &modulus), BigUint::from(445u32));
}
