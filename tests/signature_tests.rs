//! Root signing and signature verification tests

use merkleseal::{LeafRegister, SealError, Signature, SignatureBinder};
use pretty_assertions::assert_eq;

const PRIVATE_PEM: &str = include_str!("fixtures/signer_private.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/signer_public.pem");
const UNRELATED_PUBLIC_PEM: &str = include_str!("fixtures/unrelated_public.pem");
const ABC_ROOT_SIGNATURE: &str = include_str!("fixtures/abc_root.sig");

fn abc_root() -> String {
    ["a", "b", "c"].into_iter().collect::<LeafRegister>().root_hex()
}

#[test]
fn test_signature_over_tree_root_roundtrip() {
    let binder = SignatureBinder::rsa();
    let root = abc_root();

    let signature = binder.sign_root(PRIVATE_PEM, &root).unwrap();
    assert!(binder.verify_signature(PUBLIC_PEM, &signature, &root));

    let text = signature.to_base64();
    assert_eq!(text, ABC_ROOT_SIGNATURE.trim());
    assert!(binder.verify_signature_text(PUBLIC_PEM, &text, &root));
}

#[test]
fn test_every_altered_root_character_rejected() {
    let binder = SignatureBinder::rsa();
    let root = abc_root();
    let signature = binder.sign_root(PRIVATE_PEM, &root).unwrap();

    for i in 0..root.len() {
        let mut altered = root.clone();
        let replacement = if &root[i..i + 1] == "0" { "1" } else { "0" };
        altered.replace_range(i..i + 1, replacement);
        assert!(!binder.verify_signature(PUBLIC_PEM, &signature, &altered));
    }
}

#[test]
fn test_unrelated_public_key_rejected() {
    let binder = SignatureBinder::rsa();
    let root = abc_root();
    let signature = binder.sign_root(PRIVATE_PEM, &root).unwrap();
    assert!(!binder.verify_signature(UNRELATED_PUBLIC_PEM, &signature, &root));
}

#[test]
fn test_verification_checks_caller_root_not_tree() {
    let binder = SignatureBinder::rsa();
    let mut register: LeafRegister = ["a", "b", "c"].into_iter().collect();
    let signed_root = register.root_hex();
    let signature = binder.sign_root(PRIVATE_PEM, &signed_root).unwrap();

    register.add_leaf("d");
    assert!(binder.verify_signature(PUBLIC_PEM, &signature, &signed_root));
    assert!(!binder.verify_signature(PUBLIC_PEM, &signature, &register.root_hex()));
}

#[test]
fn test_signatures_are_deterministic() {
    let binder = SignatureBinder::rsa();
    let root = abc_root();
    let first = binder.sign_root(PRIVATE_PEM, &root).unwrap();
    let second = binder.sign_root(PRIVATE_PEM, &root).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_empty_tree_root_can_be_signed() {
    let binder = SignatureBinder::rsa();
    let root = LeafRegister::new().root_hex();
    assert_eq!(root, "");
    let signature = binder.sign_root(PRIVATE_PEM, &root).unwrap();
    assert!(binder.verify_signature(PUBLIC_PEM, &signature, ""));
}

#[test]
fn test_malformed_verification_inputs_are_false() {
    let binder = SignatureBinder::rsa();
    let root = abc_root();
    let truncated_key = &PUBLIC_PEM[..PUBLIC_PEM.len() / 2];

    assert!(!binder.verify_signature_text(truncated_key, ABC_ROOT_SIGNATURE, &root));
    assert!(!binder.verify_signature_text(PUBLIC_PEM, "***", &root));
    assert!(!binder.verify_signature_text(PUBLIC_PEM, "c2hvcnQ=", &root));
    assert!(!binder.verify_signature(PUBLIC_PEM, &Signature::from_bytes(Vec::new()), &root));
}

#[test]
fn test_signing_with_unusable_key_fails_loudly() {
    let binder = SignatureBinder::rsa();
    let root = abc_root();
    assert!(matches!(
        binder.sign_root(PUBLIC_PEM, &root),
        Err(SealError::InvalidPrivateKey { .. })
    ));
    assert!(binder.sign_root("", &root).is_err());
}
