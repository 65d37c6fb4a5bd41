use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_has_welcome_message() {
    let state = ChatState::default();
    assert_eq!(state.messages, vec![ChatMessage::model(WELCOME_MESSAGE)]);
}

#[test]
fn chat_state_default_not_awaiting_and_closed() {
    let state = ChatState::default();
    assert!(!state.awaiting);
    assert!(!state.open);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_user_message_immediately() {
    let mut state = ChatState::default();
    let out = state.begin_send("I have a rooftop party tonight").expect("send accepted");
    assert_eq!(out.text, "I have a rooftop party tonight");
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1], ChatMessage::user("I have a rooftop party tonight"));
    assert!(state.awaiting);
}

#[test]
fn begin_send_rejects_blank_input() {
    let mut state = ChatState::default();
    for input in ["", "   ", "\n\t "] {
        assert!(state.begin_send(input).is_none());
    }
    assert_eq!(state.messages.len(), 1);
    assert!(!state.awaiting);
}

#[test]
fn begin_send_keeps_raw_text() {
    let mut state = ChatState::default();
    let out = state.begin_send("  moody walk  ").unwrap();
    assert_eq!(out.text, "  moody walk  ");
    assert_eq!(state.messages[1].text, "  moody walk  ");
}

#[test]
fn begin_send_rejected_while_awaiting() {
    let mut state = ChatState::default();
    state.begin_send("first").unwrap();
    assert!(state.begin_send("second").is_none());
    assert_eq!(state.messages.len(), 2);
    assert!(state.awaiting);
}

#[test]
fn can_send_tracks_gate_and_input() {
    let mut state = ChatState::default();
    assert!(!state.can_send("  "));
    assert!(state.can_send("hello"));
    state.begin_send("hello").unwrap();
    assert!(!state.can_send("again"));
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_with_reply_appends_model_text() {
    let mut state = ChatState::default();
    state.begin_send("I have a rooftop party tonight").unwrap();
    state.complete(&ChatReply::Reply { text: "The Prism Vest ✦".into() });

    assert_eq!(state.messages.len(), 3);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Model);
    assert_eq!(last.text, "The Prism Vest ✦");
    assert!(!last.is_error);
    assert!(!state.awaiting);
}

#[test]
fn complete_with_empty_uses_connection_weak() {
    let mut state = ChatState::default();
    state.begin_send("hello").unwrap();
    state.complete(&ChatReply::Empty);
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, "Connection weak.");
    assert!(last.is_error);
    assert!(!state.awaiting);
}

#[test]
fn complete_with_failure_uses_signal_lost() {
    let mut state = ChatState::default();
    state.begin_send("hello").unwrap();
    state.complete(&ChatReply::Failed);
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, "Signal lost in the void.");
    assert!(last.is_error);
    assert!(!state.awaiting);
}

#[test]
fn complete_without_outstanding_send_is_ignored() {
    let mut state = ChatState::default();
    state.complete(&ChatReply::Reply { text: "stray".into() });
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn each_cycle_grows_transcript_by_two() {
    let mut state = ChatState::default();
    let replies = [ChatReply::Reply { text: "a".into() }, ChatReply::Empty, ChatReply::Failed];
    for (i, reply) in replies.iter().enumerate() {
        state.begin_send(&format!("turn {i}")).unwrap();
        state.complete(reply);
        assert_eq!(state.messages.len(), 1 + 2 * (i + 1));
    }
    let roles: Vec<ChatRole> = state.messages.iter().skip(1).map(|m| m.role).collect();
    for pair in roles.chunks(2) {
        assert_eq!(pair, [ChatRole::User, ChatRole::Model]);
    }
}

#[test]
fn rooftop_scenario_transcript() {
    let mut state = ChatState::default();
    state.begin_send("I have a rooftop party tonight").unwrap();
    state.complete(&ChatReply::Reply { text: "Void Hoodie ◈ for the night air.".into() });

    let texts: Vec<(ChatRole, &str)> = state.messages.iter().map(|m| (m.role, m.text.as_str())).collect();
    assert_eq!(texts[0], (ChatRole::Model, WELCOME_MESSAGE));
    assert_eq!(texts[1], (ChatRole::User, "I have a rooftop party tonight"));
    assert_eq!(texts[2].0, ChatRole::Model);
    assert!(!texts[2].1.is_empty());
    assert!(!state.awaiting);
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_id_is_stable_across_sends() {
    let mut state = ChatState::default();
    let first = state.begin_send("one").unwrap().session_id;
    state.complete(&ChatReply::Empty);
    let second = state.begin_send("two").unwrap().session_id;
    assert_eq!(first, second);
}

#[test]
fn separate_widgets_get_separate_sessions() {
    let mut a = ChatState::default();
    let mut b = ChatState::default();
    assert_ne!(a.session_id(), b.session_id());
}

#[test]
fn toggle_open_flips_panel() {
    let mut state = ChatState::default();
    state.toggle_open();
    assert!(state.open);
    state.toggle_open();
    assert!(!state.open);
}
