//! Integration tests for [`whitaker::Lookup`] against a mock WORDS server.
//!
//! Covers: bidirectional success, pairing of directions to endpoints, "no match" vs non-letter
//! diagnostics, fetch failure on either endpoint, and missing `<pre>` blocks.

use std::io::Write;
use std::sync::Once;
use std::time::Duration;

use mockito::{Matcher, Mock, ServerGuard};
use tracing_subscriber::{fmt, EnvFilter};
use whitaker::{Direction, Lookup, LookupConfig, LookupError, ParseFailure, Translator};

const WORDZ_PATH: &str = "/cgi-bin/wordz.pl";

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

/// Wraps a WORDS output block the way the CGI does.
fn words_page(block: &str) -> String {
    format!(
        "<html><head><title>WORDS</title></head>\n<body>\n<pre>{}</pre>\n</body></html>",
        block
    )
}

fn lookup_for(server: &ServerGuard) -> Lookup {
    let config = LookupConfig::new(&format!("{}{}", server.url(), WORDZ_PATH))
        .unwrap()
        .with_timeout(Duration::from_secs(10));
    Lookup::new(config)
}

async fn mock_direction(
    server: &mut ServerGuard,
    direction: Direction,
    word: &str,
    status: usize,
    body: String,
) -> Mock {
    server
        .mock("GET", WORDZ_PATH)
        .match_query(Matcher::UrlEncoded(
            direction.query_param().to_string(),
            word.to_string(),
        ))
        .with_status(status)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

const ROSA_LATIN: &str = "\nrosa, rosae  N (1st) F   [XXXAO]  \nrose; \nrosebush; \n\n*\n";
const ROSA_ENGLISH: &str = "\nrosa, rosae  N (1st) F   [XXXAO]  \nrose; (flower);\n*\n";

/// **Test: a word known in both directions yields a successful outcome with both sections.**
#[tokio::test]
async fn test_known_word_both_directions() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        "rosa",
        200,
        words_page(ROSA_LATIN),
    )
    .await;
    let english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        "rosa",
        200,
        words_page(ROSA_ENGLISH),
    )
    .await;

    let outcome = lookup_for(&server).translate("rosa").await.unwrap();

    latin.assert_async().await;
    english.assert_async().await;
    assert!(outcome.succeeded());
    assert_eq!(outcome.title(), "Translations for \"rosa\"");
    assert_eq!(
        outcome.latin_to_english().unwrap().body(),
        "rosa, rosae  N (1st) F   [XXXAO]  \nrose; \n\nrosebush; "
    );
    assert!(!outcome.english_to_latin().unwrap().body().is_empty());
    assert!(outcome.diagnostic().is_none());
}

/// **Test: Latin → English always comes from the `keyword=` endpoint.**
///
/// **Setup:** distinct bodies per endpoint; the `keyword=` response is delayed so it finishes last.
/// **Expected:** each body lands in its own direction's slot.
#[tokio::test]
async fn test_pairing_follows_endpoint_not_completion_order() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let slow_body = words_page("\nLATIN-SIDE entry\n");
    let _latin = server
        .mock("GET", WORDZ_PATH)
        .match_query(Matcher::UrlEncoded("keyword".to_string(), "amo".to_string()))
        .with_status(200)
        .with_chunked_body(move |w| {
            std::thread::sleep(Duration::from_millis(150));
            w.write_all(slow_body.as_bytes())
        })
        .create_async()
        .await;
    let _english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        "amo",
        200,
        words_page("\nENGLISH-SIDE entry\n"),
    )
    .await;

    let outcome = lookup_for(&server).translate("amo").await.unwrap();

    assert!(outcome.latin_to_english().unwrap().body().starts_with("LATIN-SIDE"));
    assert!(outcome.english_to_latin().unwrap().body().starts_with("ENGLISH-SIDE"));
}

/// **Test: alphabetic nonsense gives a failed outcome with the "no match" diagnostic.**
#[tokio::test]
async fn test_alphabetic_nonsense_selects_no_match() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let word = "blorptastic";
    let _latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        word,
        200,
        words_page("\nblorptastic          ========   UNKNOWN    \n"),
    )
    .await;
    let _english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        word,
        200,
        words_page("\nNo Match\n"),
    )
    .await;

    let outcome = lookup_for(&server).translate(word).await.unwrap();

    assert!(!outcome.succeeded());
    assert!(outcome.sections().is_empty());
    assert_eq!(outcome.title(), "Failed to translate \"blorptastic\"");
    let diagnostic = outcome.diagnostic().unwrap().to_string();
    assert!(diagnostic.contains("language other than latin/english"));
    assert!(!diagnostic.contains("non-letter"));
}

/// **Test: input with digits/punctuation selects the "non-letter characters" diagnostic.**
///
/// The word is percent-encoded on the wire and decoded back by the matcher.
#[tokio::test]
async fn test_non_letter_input_selects_non_letter_variant() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let word = "r0sa & co";
    let latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        word,
        200,
        words_page("\nr0sa  ========   UNKNOWN\n"),
    )
    .await;
    let english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        word,
        200,
        words_page("\nNo Match\n"),
    )
    .await;

    let outcome = lookup_for(&server).translate(word).await.unwrap();

    latin.assert_async().await;
    english.assert_async().await;
    assert!(!outcome.succeeded());
    assert!(outcome
        .diagnostic()
        .unwrap()
        .to_string()
        .ends_with("Error: non-letter characters found"));
}

/// **Test: one empty direction does not affect the other.**
#[tokio::test]
async fn test_one_direction_empty_is_still_success() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let _latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        "love",
        200,
        words_page("\nlove  ========   UNKNOWN\n"),
    )
    .await;
    let _english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        "love",
        200,
        words_page("\namo, amare, amavi, amatus  V (1st)   [XXXAO]  \nlove; like; \n"),
    )
    .await;

    let outcome = lookup_for(&server).translate("love").await.unwrap();

    assert!(outcome.succeeded());
    assert!(outcome.latin_to_english().is_none());
    assert_eq!(outcome.sections().len(), 1);
    assert_eq!(outcome.sections()[0].direction, Direction::EnglishToLatin);
}

/// **Test: a non-success status on the English endpoint fails the whole query.**
#[tokio::test]
async fn test_english_endpoint_failure_is_fetch_error() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let _latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        "rosa",
        200,
        words_page(ROSA_LATIN),
    )
    .await;
    let _english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        "rosa",
        503,
        "busy".to_string(),
    )
    .await;

    let err = lookup_for(&server).translate("rosa").await.unwrap_err();

    match err {
        LookupError::Fetch { direction, .. } => assert_eq!(direction, Direction::EnglishToLatin),
        other => panic!("expected Fetch error, got {:?}", other),
    }
}

/// **Test: a failing Latin endpoint is reported even when the English side succeeds.**
#[tokio::test]
async fn test_latin_endpoint_failure_is_fetch_error() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let _latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        "rosa",
        500,
        String::new(),
    )
    .await;
    let _english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        "rosa",
        200,
        words_page(ROSA_ENGLISH),
    )
    .await;

    let err = lookup_for(&server).translate("rosa").await.unwrap_err();

    assert_eq!(err.direction(), Some(Direction::LatinToEnglish));
    assert!(!err.is_upstream_format_change());
}

/// **Test: an unreachable service is a fetch error, not a failed outcome.**
#[tokio::test]
async fn test_unreachable_service_is_fetch_error() {
    init_tracing();
    let config = LookupConfig::new("http://127.0.0.1:9/cgi-bin/wordz.pl")
        .unwrap()
        .with_timeout(Duration::from_secs(2));

    let err = Lookup::new(config).translate("rosa").await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch { .. }));
}

/// **Test: a page without `<pre>` is a parse error, distinct from "no translation".**
#[tokio::test]
async fn test_missing_pre_is_parse_error() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let _latin = mock_direction(
        &mut server,
        Direction::LatinToEnglish,
        "rosa",
        200,
        words_page(ROSA_LATIN),
    )
    .await;
    let _english = mock_direction(
        &mut server,
        Direction::EnglishToLatin,
        "rosa",
        200,
        "<html><body><h1>Maintenance</h1></body></html>".to_string(),
    )
    .await;

    let err = lookup_for(&server).translate("rosa").await.unwrap_err();

    assert!(err.is_upstream_format_change());
    match err {
        LookupError::Parse { direction, reason } => {
            assert_eq!(direction, Direction::EnglishToLatin);
            assert_eq!(reason, ParseFailure::MissingBlock);
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}
