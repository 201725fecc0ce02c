//! Temporal claim validation through the decode pipeline
//!
//! All tests pin the clock so boundaries can be checked to the second.

use jwtutil::*;
use serde_json::json;

const SECRET: &[u8] = b"secret";
const NOW: i64 = 1_700_000_000;

fn engine_at(now: i64) -> TokenEngine {
    TokenEngine::new()
        .validate(Validation::new().at(now))
        .build()
        .unwrap()
}

fn token_with(claims: serde_json::Value) -> String {
    let claims = ClaimSet::from_value(claims).unwrap();
    encode(SECRET, &claims, None).unwrap().into_parts().0
}

#[test]
fn expiry_boundary_is_inclusive() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let token = token_with(json!({ "exp": NOW }));
    assert_eq!(engine_at(NOW - 1).verdict(&token, SECRET), Verdict::Valid);
    assert_eq!(engine_at(NOW).verdict(&token, SECRET), Verdict::Expired);
    assert_eq!(engine_at(NOW + 1).verdict(&token, SECRET), Verdict::Expired);
}

#[test]
fn not_before_boundary_is_inclusive() {
    let token = token_with(json!({ "nbf": NOW }));
    assert_eq!(
        engine_at(NOW - 1).verdict(&token, SECRET),
        Verdict::NotYetValid
    );
    assert_eq!(engine_at(NOW).verdict(&token, SECRET), Verdict::Valid);
}

#[test]
fn expired_claims_are_returned_with_error() {
    let token = token_with(json!({ "exp": NOW - 10, "account": 1234 }));
    let decoded = engine_at(NOW).decode(&token, SECRET);

    assert_eq!(decoded.verdict(), Verdict::Expired);
    assert!(decoded.verdict().is_authentic());
    assert_eq!(
        decoded.claims().and_then(|c| c.get("account")),
        Some(&json!(1234))
    );
    assert_eq!(
        decoded.error(),
        Some(&Error::TokenExpired {
            expired_at: NOW - 10,
            now: NOW,
            skew: 0
        })
    );
    assert!(decoded.into_trusted().is_err());
}

#[test]
fn expired_takes_precedence_over_not_yet_valid() {
    let token = token_with(json!({ "exp": NOW - 10, "nbf": NOW + 10 }));
    assert_eq!(engine_at(NOW).verdict(&token, SECRET), Verdict::Expired);
}

#[test]
fn signature_checked_before_time() {
    let token = token_with(json!({ "exp": NOW - 10 }));
    assert_eq!(
        engine_at(NOW).verdict(&token, b"other"),
        Verdict::InvalidSignature
    );
}

#[test]
fn fractional_numeric_dates() {
    let token = token_with(json!({ "exp": NOW as f64 + 0.5 }));
    assert_eq!(engine_at(NOW).verdict(&token, SECRET), Verdict::Valid);
    assert_eq!(engine_at(NOW + 1).verdict(&token, SECRET), Verdict::Expired);

    let token = token_with(json!({ "nbf": NOW as f64 - 0.5 }));
    assert_eq!(engine_at(NOW - 1).verdict(&token, SECRET), Verdict::NotYetValid);
    assert_eq!(engine_at(NOW).verdict(&token, SECRET), Verdict::Valid);
}

#[test]
fn non_numeric_temporal_claims_are_malformed() {
    for claims in [
        json!({ "exp": "9999999999" }),
        json!({ "nbf": null }),
        json!({ "exp": [NOW] }),
    ] {
        let token = token_with(claims.clone());
        let decoded = engine_at(NOW).decode(&token, SECRET);
        assert_eq!(decoded.verdict(), Verdict::Malformed, "{claims}");
        assert!(decoded.claims().is_some());
        assert!(matches!(decoded.error(), Some(Error::ClaimMalformed { .. })));
    }
}

#[test]
fn clock_skew_widens_both_windows() {
    let engine = TokenEngine::new()
        .validate(Validation::new().at(NOW).clock_skew(60))
        .build()
        .unwrap();

    let recently_expired = token_with(json!({ "exp": NOW - 59 }));
    assert_eq!(engine.verdict(&recently_expired, SECRET), Verdict::Valid);

    let long_expired = token_with(json!({ "exp": NOW - 60 }));
    assert_eq!(engine.verdict(&long_expired, SECRET), Verdict::Expired);

    let almost_valid = token_with(json!({ "nbf": NOW + 60 }));
    assert_eq!(engine.verdict(&almost_valid, SECRET), Verdict::Valid);

    let too_early = token_with(json!({ "nbf": NOW + 61 }));
    assert_eq!(engine.verdict(&too_early, SECRET), Verdict::NotYetValid);
}

#[test]
fn clock_skew_is_bounded() {
    assert!(TokenEngine::new()
        .validate(Validation::new().clock_skew(300))
        .build()
        .is_ok());
    assert_eq!(
        TokenEngine::new()
            .validate(Validation::new().clock_skew(301))
            .build()
            .err(),
        Some(Error::ClockSkewTooLarge {
            value: 301,
            max: 300
        })
    );
}

#[test]
fn disabled_checks_ignore_temporal_claims() {
    let engine = TokenEngine::new()
        .validate(Validation::new().at(NOW).no_exp_validation().no_nbf_validation())
        .build()
        .unwrap();
    let token = token_with(json!({ "exp": NOW - 1, "nbf": "whenever" }));
    assert_eq!(engine.verdict(&token, SECRET), Verdict::Valid);
}

#[test]
fn unverified_decode_ignores_time() {
    let token = token_with(json!({ "exp": NOW - 1 }));
    let decoded = engine_at(NOW).decode(&token, b"");
    assert_eq!(decoded.verdict(), Verdict::Unverified);
    assert_eq!(decoded.claims().and_then(StandardClaims::expiration), Some(NOW - 1));
}

#[test]
fn system_clock_default() {
    let far_future = token_with(json!({ "exp": 32_503_680_000i64 }));
    assert_eq!(decode(&far_future, SECRET).verdict(), Verdict::Valid);

    let past = token_with(json!({ "exp": 1 }));
    assert_eq!(decode(&past, SECRET).verdict(), Verdict::Expired);
}

#[test]
fn issued_at_uses_engine_clock() {
    let engine = TokenEngine::new()
        .validate(Validation::new().at(NOW))
        .issued_at(true)
        .build()
        .unwrap();
    let encoded = engine.encode(SECRET, &ClaimSet::new(), None).unwrap();
    assert_eq!(encoded.claims().issued_at(), Some(NOW));
}
