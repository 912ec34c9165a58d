//! Response Parser Tests
//!
//! Tests for parsing raw terminated response blocks.

use rrp_client::{FormatError, Response};

// =============================================================================
// Status Line Tests
// =============================================================================

#[test]
fn test_parse_minimal_success() {
    let response = Response::parse("200 Command completed successfully\r\n.\r\n").unwrap();

    assert_eq!(response.code(), 200);
    assert_eq!(response.description(), "Command completed successfully");
    assert!(response.attributes().is_empty());
    assert!(response.is_success());
}

#[test]
fn test_parse_preserves_raw_block() {
    let block = "200 OK\r\nDomainName:example.com\r\n.\r\n";
    let response = Response::parse(block).unwrap();

    assert_eq!(response.raw(), block);
}

#[test]
fn test_parse_trims_status_line_segments() {
    let response = Response::parse("200   Command completed successfully  \r\n.\r\n").unwrap();

    assert_eq!(response.code(), 200);
    assert_eq!(response.description(), "Command completed successfully");
}

#[test]
fn test_parse_empty_input() {
    let err = Response::parse("").unwrap_err();
    assert_eq!(err, FormatError::MissingStatusLine);
}

#[test]
fn test_parse_garbage_first_line() {
    let err = Response::parse("garbage").unwrap_err();
    assert_eq!(err, FormatError::MissingCode);
}

#[test]
fn test_parse_non_numeric_code() {
    let err = Response::parse("abc Command completed\r\n.\r\n").unwrap_err();
    assert_eq!(err, FormatError::MissingCode);
}

#[test]
fn test_parse_negative_code() {
    let err = Response::parse("-200 Command completed\r\n.\r\n").unwrap_err();
    assert_eq!(err, FormatError::MissingCode);
}

#[test]
fn test_parse_code_without_description() {
    let err = Response::parse("200\r\n.\r\n").unwrap_err();
    assert_eq!(err, FormatError::MissingDescription);
}

#[test]
fn test_parse_code_with_blank_description() {
    let err = Response::parse("200    \r\n.\r\n").unwrap_err();
    assert_eq!(err, FormatError::MissingDescription);
}

// =============================================================================
// Attribute Tests
// =============================================================================

#[test]
fn test_parse_repeated_keys_keep_encounter_order() {
    let block = "200 OK\r\n\
                 DomainName:example.com\r\n\
                 NameServer:ns1.example.com\r\n\
                 NameServer:ns2.example.com\r\n\
                 .\r\n";
    let response = Response::parse(block).unwrap();

    assert_eq!(
        response.attribute("nameserver").unwrap(),
        ["ns1.example.com", "ns2.example.com"]
    );
    assert_eq!(response.attribute("domainname").unwrap(), ["example.com"]);
}

#[test]
fn test_parse_keys_lowercased_and_trimmed() {
    let block = "200 OK\r\n  DomainName : example.com \r\n.\r\n";
    let response = Response::parse(block).unwrap();

    assert_eq!(response.first_attribute("domainname"), Some("example.com"));
    assert!(response.attributes().contains_key("domainname"));
}

#[test]
fn test_attribute_lookup_is_case_insensitive() {
    let response = Response::parse("200 OK\r\nDomainName:example.com\r\n.\r\n").unwrap();

    assert_eq!(response.first_attribute("DomainName"), Some("example.com"));
    assert_eq!(response.first_attribute("DOMAINNAME"), Some("example.com"));
}

#[test]
fn test_parse_value_keeps_inner_colons() {
    let response = Response::parse("200 OK\r\nRemark:note: call back\r\n.\r\n").unwrap();

    assert_eq!(response.first_attribute("remark"), Some("note: call back"));
}

#[test]
fn test_parse_attribute_without_colon() {
    let err = Response::parse("200 OK\r\nnot an attribute\r\n.\r\n").unwrap_err();
    assert_eq!(
        err,
        FormatError::MalformedAttribute("not an attribute".to_string())
    );
}

#[test]
fn test_missing_attribute_lookup() {
    let response = Response::parse("200 OK\r\n.\r\n").unwrap();

    assert!(response.attribute("nameserver").is_none());
    assert!(response.first_attribute("nameserver").is_none());
}

// =============================================================================
// Terminator Tests
// =============================================================================

#[test]
fn test_parse_unterminated_block() {
    let err = Response::parse("200 OK\r\nDomainName:example.com\r\n").unwrap_err();
    assert_eq!(err, FormatError::UnterminatedResponse);
}

#[test]
fn test_parse_status_line_only_unterminated() {
    let err = Response::parse("200 OK\r\n").unwrap_err();
    assert_eq!(err, FormatError::UnterminatedResponse);
}

#[test]
fn test_parse_stops_at_terminator() {
    let block = "200 OK\r\nDomainName:example.com\r\n.\r\nIgnored:line\r\n";
    let response = Response::parse(block).unwrap();

    assert_eq!(response.attributes().len(), 1);
    assert!(response.attribute("ignored").is_none());
}

#[test]
fn test_parse_accepts_bare_lf_lines() {
    let block = "200 OK\nDomainName:example.com\n.\n";
    let response = Response::parse(block).unwrap();

    assert_eq!(response.code(), 200);
    assert_eq!(response.first_attribute("domainname"), Some("example.com"));
}

// =============================================================================
// Code Class Tests
// =============================================================================

#[test]
fn test_is_success_boundaries() {
    let ok = Response::parse("299 upper bound\r\n.\r\n").unwrap();
    assert!(ok.is_success());

    let err = Response::parse("300 out of class\r\n.\r\n").unwrap();
    assert!(!err.is_success());

    let denied = Response::parse("530 Authentication failed\r\n.\r\n").unwrap();
    assert!(!denied.is_success());
}
