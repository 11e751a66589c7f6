use std::net::Ipv4Addr;
use std::sync::Arc;

use proptest::prelude::*;

use super::{
    DomainValidator, ErrorMode, RenderedError, Signal, SignupChecker, Stage, ValidationOptions,
};
use crate::banned::{BannedEntry, BannedPatterns, WildcardBanLookup};
use crate::dns::tests::StubLookup;
use crate::dns::{DnsRecord, DnsReputation, MxRecord};
use crate::syntax::AcceptAllSyntax;
use crate::typo::{MisspellingSeeds, MisspellingTable};
use crate::verdict::{ErrorKind, Payload, WarningKind};

fn table() -> Arc<MisspellingTable> {
    Arc::new(MisspellingTable::build(MisspellingSeeds::default()))
}

fn validator(stub: &StubLookup) -> DomainValidator<DnsReputation<&StubLookup>> {
    DomainValidator::new(DnsReputation::new(stub, WildcardBanLookup), table())
}

fn mx_answer() -> StubLookup {
    StubLookup::answering(vec![DnsRecord::mx(10, "mx.example.com")])
}

#[test]
fn valid_address_keeps_accepted_mx() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        "Bob@Example.COM",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert!(outcome.valid);
    assert_eq!(outcome.error, None);
    assert_eq!(outcome.local_part, "Bob");
    assert_eq!(outcome.domain, "example.com");
    assert_eq!(outcome.accepted_mx, vec![MxRecord::new(10, "mx.example.com")]);
    assert_eq!(outcome.decided_at, Stage::Done);
    assert_eq!(outcome.rendered_error(), None);
    assert_eq!(stub.calls(), 1);
}

#[test]
fn missing_at_is_invalid_without_further_work() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        "not-an-address",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert!(!outcome.valid);
    assert_eq!(outcome.error, Some(ErrorKind::InvalidSyntax));
    assert_eq!(outcome.decided_at, Stage::Init);
    assert_eq!(stub.calls(), 0);
}

#[test]
fn single_label_domain_skips_dns() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        "user@localhost",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::LocalOrReservedDomain));
    assert_eq!(outcome.decided_at, Stage::DomainClassify);
    assert_eq!(stub.calls(), 0);
}

#[test]
fn reserved_top_level_names_rejected() {
    let stub = mx_answer();
    let validator = validator(&stub);
    for address in ["user@test", "user@foo.test", "user@bar.internal", "user@box.LAN"] {
        let outcome =
            validator.validate(address, &BannedPatterns::empty(), &ValidationOptions::default());
        assert_eq!(
            outcome.error,
            Some(ErrorKind::LocalOrReservedDomain),
            "{address}"
        );
        assert_eq!(outcome.compact_key(), Some("invaliddomain"));
    }
    assert_eq!(stub.calls(), 0);
}

#[test]
fn typo_caught_before_dns() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        "user@gamil.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert!(!outcome.valid);
    assert_eq!(outcome.error, Some(ErrorKind::Typo));
    assert_eq!(outcome.suggestion(), Some("gmail.com"));
    assert_eq!(outcome.decided_at, Stage::TypoCheck);
    assert_eq!(stub.calls(), 0);
    insta::assert_snapshot!(outcome.render(ErrorMode::Compact).unwrap(), @"typo");
}

#[test]
fn typo_check_can_be_disabled() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        "user@gamil.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default().with_typo_check(false),
    );
    assert!(outcome.valid);
    assert_eq!(stub.calls(), 1);
}

#[test]
fn typo_beats_banned_pattern() {
    let stub = StubLookup::answering(vec![DnsRecord::mx(10, "mx.gamil.com")]);
    let banned = BannedPatterns::from_patterns(["*@mx.gamil.com"]).unwrap();
    let outcome =
        validator(&stub).validate("user@gamil.com", &banned, &ValidationOptions::default());
    assert_eq!(outcome.error, Some(ErrorKind::Typo));
}

#[test]
fn unknown_domain_is_no_dns_record() {
    let stub = StubLookup::answering(Vec::new());
    let outcome = validator(&stub).validate(
        "user@nonexistent-domain-xyz123.invalid-tld-example",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::NoDnsRecord));
    assert_eq!(outcome.decided_at, Stage::DnsResolve);
    insta::assert_snapshot!(outcome.rendered_error().unwrap(), @"invaliddomain");
}

#[test]
fn resolver_failure_degrades_to_no_dns_record() {
    let stub = StubLookup::failing();
    let outcome = validator(&stub).validate(
        "user@example.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::NoDnsRecord));
}

#[test]
fn a_only_domain_valid_with_warning() {
    let stub = StubLookup::answering(vec![DnsRecord::A(Ipv4Addr::new(192, 0, 2, 7))]);
    let outcome = validator(&stub).validate(
        "user@example.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default().extended(),
    );
    assert!(outcome.valid);
    assert!(outcome.has_warning(WarningKind::NoDnsMxRecord));
    assert_eq!(outcome.rendered_error(), None);
    assert_eq!(
        outcome.signals(),
        vec![Signal::new("no_dns_mx_record", Payload::Flag)]
    );
}

#[test]
fn null_mx_is_domain_accepts_no_mail() {
    let stub = StubLookup::answering(vec![DnsRecord::mx(0, "")]);
    let outcome = validator(&stub).validate(
        "user@example.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::DomainAcceptsNoMail));
    assert_eq!(outcome.compact_key(), Some("invaliddomain"));
}

#[test]
fn banned_target_renders_both_modes_from_one_outcome() {
    let stub = StubLookup::answering(vec![DnsRecord::mx(10, "mx.spam.example")]);
    let entry = BannedEntry::new("*@mx.spam.example").with_reason("known spam host");
    let banned = BannedPatterns::new([entry.clone()]).unwrap();

    let outcome = validator(&stub).validate(
        "user@example.com",
        &banned,
        &ValidationOptions::default(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::BannedEmail));
    assert_eq!(
        outcome.render(ErrorMode::Compact),
        Some(RenderedError::Compact("banned"))
    );
    assert_eq!(
        outcome.render(ErrorMode::Extended),
        Some(RenderedError::Extended(vec![Signal::new(
            "banned_email",
            Payload::Banned { entry }
        )]))
    );
}

#[test]
fn syntax_rejection_carries_reasons() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        ".bob@example.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default().extended(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::InvalidSyntax));
    assert_eq!(outcome.decided_at, Stage::SyntaxCheck);
    assert_eq!(
        outcome.signals(),
        vec![Signal::new(
            "invalid",
            Payload::Reasons {
                reasons: vec!["invalid local part (strict rules)".to_string()]
            }
        )]
    );
    assert_eq!(stub.calls(), 0);
}

#[test]
fn custom_syntax_validator_is_used() {
    let stub = mx_answer();
    let outcome = validator(&stub).with_syntax(AcceptAllSyntax).validate(
        ".bob@example.com",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert!(outcome.valid);
}

#[test]
fn dns_validation_can_be_skipped() {
    let stub = mx_answer();
    let outcome = validator(&stub).validate(
        "user@localhost",
        &BannedPatterns::empty(),
        &ValidationOptions::for_account_edit(true, true),
    );
    assert!(outcome.valid);
    assert_eq!(stub.calls(), 0);
}

#[test]
fn trailing_dot_domain_is_classified_without_dot() {
    let stub = mx_answer();
    let validator = validator(&stub);
    let outcome = validator.validate(
        "user@localhost.",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert_eq!(outcome.error, Some(ErrorKind::LocalOrReservedDomain));

    let outcome = validator.validate(
        "user@gmail.com.",
        &BannedPatterns::empty(),
        &ValidationOptions::default(),
    );
    assert!(outcome.valid);
    assert_eq!(stub.last_name().as_deref(), Some("gmail.com."));
}

#[test]
fn diagnose_leads_errors_with_invalid() {
    let stub = StubLookup::answering(Vec::new());
    let report = validator(&stub).diagnose("  user@example.com ", &BannedPatterns::empty());
    assert!(!report.valid);
    assert_eq!(report.formatted_email, "user@example.com");
    let codes: Vec<&str> = report.errors.iter().map(|s| s.code).collect();
    assert_eq!(codes, ["invalid", "no_dns_record"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn diagnose_does_not_repeat_invalid() {
    let stub = mx_answer();
    let report = validator(&stub).diagnose("nobody", &BannedPatterns::empty());
    let codes: Vec<&str> = report.errors.iter().map(|s| s.code).collect();
    assert_eq!(codes, ["invalid"]);
}

#[test]
fn diagnose_valid_lists_warnings_only() {
    let stub = StubLookup::answering(vec![DnsRecord::A(Ipv4Addr::new(192, 0, 2, 7))]);
    let report = validator(&stub).diagnose("user@example.com", &BannedPatterns::empty());
    assert!(report.valid);
    assert!(report.errors.is_empty());
    let codes: Vec<&str> = report.warnings.iter().map(|s| s.code).collect();
    assert_eq!(codes, ["no_dns_mx_record"]);
}

struct ListedDomain(&'static str);

impl SignupChecker for ListedDomain {
    fn check_signup(&self, email: &str) -> Vec<String> {
        if email.ends_with(self.0) {
            vec![format!("{} is on the signup block list", self.0)]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn diagnose_without_signup_checks_reports_none() {
    let stub = mx_answer();
    let report = validator(&stub).diagnose("user@example.com", &BannedPatterns::empty());
    assert!(report.valid);
    assert!(report.signup_errors.is_empty());
}

#[test]
fn signup_findings_reported_without_affecting_validity() {
    let stub = mx_answer();
    let checkers = [ListedDomain("example.com"), ListedDomain("example.org")];
    let report = validator(&stub).diagnose_with_signup(
        " user@example.com ",
        &BannedPatterns::empty(),
        &checkers[..],
    );
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert_eq!(
        report.signup_errors,
        ["example.com is on the signup block list"]
    );
}

#[test]
fn signup_findings_kept_alongside_errors() {
    let stub = StubLookup::answering(Vec::new());
    let report = validator(&stub).diagnose_with_signup(
        "user@example.com",
        &BannedPatterns::empty(),
        &ListedDomain("example.com"),
    );
    assert!(!report.valid);
    assert_eq!(report.signup_errors.len(), 1);
    let codes: Vec<&str> = report.errors.iter().map(|s| s.code).collect();
    assert_eq!(codes, ["invalid", "no_dns_record"]);
}

proptest! {
    #[test]
    fn single_label_never_reaches_dns(label in "[a-z][a-z0-9]{0,15}") {
        let stub = mx_answer();
        let outcome = validator(&stub).validate(
            &format!("user@{label}"),
            &BannedPatterns::empty(),
            &ValidationOptions::default(),
        );
        prop_assert_eq!(outcome.error, Some(ErrorKind::LocalOrReservedDomain));
        prop_assert_eq!(stub.calls(), 0);
    }
}
