use super::*;

#[test]
fn transcript_ends_with_success() {
    let state = TerminalState::default();
    let last = state.transcript().last().unwrap();
    assert_eq!(last.style, TranscriptStyle::Success);
    assert_eq!(
        state
            .transcript()
            .iter()
            .filter(|l| l.style == TranscriptStyle::Command)
            .count(),
        2
    );
}

#[test]
fn log_buffer_is_capped() {
    let mut state = TerminalState::default();
    for i in 0..(LOG_BUFFER_CAP + 5) {
        state.push_log(format!("line {i}"));
    }
    assert_eq!(state.logs().len(), LOG_BUFFER_CAP);
    assert_eq!(state.logs().front().map(String::as_str), Some("line 5"));
}
