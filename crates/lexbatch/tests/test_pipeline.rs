//! TEST runs against the in-memory Lex double.

use lexbatch::{run, run_test, Mode, RunConfig, RunInputs, RunOutcome, Settings, Verdict};
use lexbatch_corpus::{parse_corpus, CorpusReport};
use lexbatch_test_utils::{Call, FakeLexPlatform};

fn config() -> RunConfig {
    let inputs = RunInputs {
        target: "intent".to_string(),
        input: "corpus.csv".to_string(),
        access_key: "AKID".to_string(),
        secret_key: "secret".to_string(),
        bot_name: "OrderBot".to_string(),
        bot_alias: Some("prod".to_string()),
        ..Default::default()
    };
    RunConfig::build(Mode::Test, inputs, &Settings::default()).unwrap()
}

#[test]
fn test_three_of_four_correct() {
    let platform = FakeLexPlatform::new()
        .predict("hello", "greeting")
        .predict("bye", "farewell")
        .predict("order pizza", "OrderPizza")
        .predict("cancel it", "greeting");
    let corpus = parse_corpus(
        "greeting,hello\nfarewell,bye\nOrderPizza,order pizza\nCancelOrder,cancel it\n",
    );

    let report = run_test(&platform, &config(), &corpus);

    assert_eq!(report.total, 4);
    assert_eq!(report.correct, 3);
    assert_eq!(report.accuracy(), Some(75.0));
    assert_eq!(report.outcomes[3].verdict, Verdict::Incorrect);
    assert_eq!(report.outcomes[3].predicted.as_deref(), Some("greeting"));
}

#[test]
fn test_empty_corpus_has_no_accuracy() {
    let platform = FakeLexPlatform::new();

    let report = run_test(&platform, &config(), &CorpusReport::default());

    assert_eq!(report.total, 0);
    assert_eq!(report.accuracy(), None);
    assert!(platform.calls().is_empty());
}

#[test]
fn test_failed_call_scores_incorrect_and_run_continues() {
    let platform = FakeLexPlatform::new()
        .fail_post_text("hello")
        .predict("bye", "farewell");
    let corpus = parse_corpus("greeting,hello\nfarewell,bye\n");

    let report = run_test(&platform, &config(), &corpus);

    assert_eq!(report.outcomes[0].verdict, Verdict::Incorrect);
    assert!(report.outcomes[0].failure.is_some());
    assert_eq!(report.outcomes[1].verdict, Verdict::Correct);
    assert_eq!(report.failed_calls(), 1);
    assert_eq!(report.accuracy(), Some(50.0));
}

#[test]
fn test_missing_prediction_scores_incorrect_without_failure() {
    let platform = FakeLexPlatform::new().predict_nothing("hmm");
    let corpus = parse_corpus("greeting,hmm\n");

    let report = run_test(&platform, &config(), &corpus);

    assert_eq!(report.outcomes[0].verdict, Verdict::Incorrect);
    assert_eq!(report.outcomes[0].predicted, None);
    assert_eq!(report.outcomes[0].failure, None);
    assert_eq!(report.failed_calls(), 0);
}

#[test]
fn test_intent_comparison_ignores_case() {
    let platform = FakeLexPlatform::new().predict("hello", "GREETING");
    let corpus = parse_corpus("Greeting,hello\n");

    let report = run_test(&platform, &config(), &corpus);

    assert_eq!(report.correct, 1);
}

#[test]
fn test_every_record_sent_with_alias_and_user() {
    let platform = FakeLexPlatform::new();
    let corpus = parse_corpus("a,one\nb,two\na,one\n");

    run_test(&platform, &config(), &corpus);

    let sent: Vec<String> = platform
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::PostText {
                bot_name,
                bot_alias,
                user_id,
                input_text,
            } => {
                assert_eq!(bot_name, "OrderBot");
                assert_eq!(bot_alias, "prod");
                assert_eq!(user_id, "lexbatch");
                input_text
            }
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    // Duplicates are evaluated individually, in order.
    assert_eq!(sent, vec!["one", "two", "one"]);
}

#[test]
fn test_accuracy_bounded_and_grows_with_correct_answers() {
    let corpus = parse_corpus("a,1\nb,2\nc,3\nd,4\ne,5\n");
    let mut previous = -1.0;
    for correct in 0..=5 {
        let mut platform = FakeLexPlatform::new();
        for record in corpus.records.iter().take(correct) {
            platform = platform.predict(&record.utterance, &record.intent);
        }
        let accuracy = run_test(&platform, &config(), &corpus).accuracy().unwrap();
        assert!((0.0..=100.0).contains(&accuracy));
        assert!(accuracy > previous);
        previous = accuracy;
    }
    assert_eq!(previous, 100.0);
}

#[test]
fn test_run_dispatches_test_mode() {
    let platform = FakeLexPlatform::new().predict("hello", "greeting");
    let corpus = parse_corpus("greeting,hello\n");

    match run(&platform, &config(), &corpus) {
        RunOutcome::Tested(report) => assert_eq!(report.accuracy(), Some(100.0)),
        other => panic!("expected a test report, got {:?}", other),
    }
}
