use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use super::AppState;
use super::AppStateProps;
use super::CommandOutcome;
use crate::domain::models::AccountSummary;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::MessageType;
use crate::domain::models::OverlapPolicy;
use crate::domain::models::ReplyPolicy;
use crate::domain::models::ReplyPolicyName;
use crate::domain::models::ReplyPrompt;
use crate::domain::models::Variant;
use crate::infrastructure::policies::keyword::KeywordPolicy;

struct DownPolicy {}

#[async_trait]
impl ReplyPolicy for DownPolicy {
    fn name(&self) -> ReplyPolicyName {
        return ReplyPolicyName::Remote;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        bail!("connection refused");
    }

    #[allow(clippy::implicit_return)]
    async fn get_reply(&self, _prompt: &ReplyPrompt) -> Result<String> {
        bail!("connection refused");
    }
}

fn account() -> AccountSummary {
    return AccountSummary {
        customer_name: "Ahmed Mohammed".to_string(),
        account_number: "****7892".to_string(),
        balance: "₹ 45,230.50".to_string(),
        last_login: "2024-01-15 14:30".to_string(),
    };
}

async fn create_app_state(
    variant: Variant,
    language: Language,
) -> (AppState, mpsc::UnboundedReceiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let props = AppStateProps {
        account: account(),
        language,
        overlap: OverlapPolicy::Supersede,
        policy: Box::new(KeywordPolicy::new(
            "₹ 45,230.50",
            Duration::from_millis(1500),
        )),
        variant,
    };

    let mut app_state = AppState::new(props, tx).await;
    app_state.last_known_width = 100;
    app_state.last_known_height = 300;

    return (app_state, rx);
}

fn last_text(app_state: &AppState) -> String {
    return app_state
        .simulator
        .messages()
        .last()
        .map(|message| return message.text.to_string())
        .unwrap_or_default();
}

mod new {
    use super::*;

    #[tokio::test]
    async fn it_starts_with_the_greeting() {
        let (app_state, _rx) = create_app_state(Variant::Classic, Language::En).await;

        assert_eq!(app_state.simulator.messages().len(), 1);
        assert!(app_state.simulator.is_online());
        assert!(!app_state.simulator.is_composing());
        assert!(app_state.toast.is_none());
    }

    #[tokio::test]
    async fn it_reports_failed_health_checks() {
        let (tx, _rx) = mpsc::unbounded_channel::<Event>();
        let props = AppStateProps {
            account: account(),
            language: Language::En,
            overlap: OverlapPolicy::Supersede,
            policy: Box::new(DownPolicy {}),
            variant: Variant::Classic,
        };

        let app_state = AppState::new(props, tx).await;
        let messages = app_state.simulator.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].author, Author::Notice);
        assert_eq!(messages[1].message_type(), MessageType::Error);
        insta::assert_snapshot!(messages[1].text, @r###"
        The remote reply policy isn't responding, so replies may fail until it's back.

        Error: connection refused
        "###);
    }
}

mod handle_slash_commands {
    use super::*;

    #[tokio::test]
    async fn it_breaks_on_quit() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        let outcome = app_state.handle_slash_commands("/q", &tx)?;

        assert_eq!(outcome, CommandOutcome::Quit);
        assert_eq!(app_state.simulator.messages().len(), 1);
        return Ok(());
    }

    #[tokio::test]
    async fn it_ignores_free_text() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        let outcome = app_state.handle_slash_commands("what is my balance?", &tx)?;

        assert_eq!(outcome, CommandOutcome::NotCommand);
        assert_eq!(app_state.simulator.messages().len(), 1);
        return Ok(());
    }

    #[tokio::test]
    async fn it_shows_help() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/help", &tx)?;

        assert!(last_text(&app_state).starts_with("COMMANDS:"));
        assert_eq!(
            app_state.simulator.messages().last().unwrap().author,
            Author::Notice
        );
        return Ok(());
    }

    #[tokio::test(start_paused = true)]
    async fn it_submits_balance_quick_action() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, mut events) = create_app_state(Variant::Classic, Language::Ar).await;

        let outcome = app_state.handle_slash_commands("/balance", &tx)?;
        assert_eq!(outcome, CommandOutcome::Handled);

        // The classic shell always sends the English utterance.
        assert_eq!(last_text(&app_state), "Check my account balance");
        assert!(app_state.simulator.is_composing());

        match events.recv().await {
            Some(Event::ReplyReady(res)) => app_state.handle_reply(res),
            _ => bail!("Wrong enum"),
        }

        assert_eq!(app_state.simulator.messages().len(), 3);
        assert!(last_text(&app_state).contains("₹ 45,230.50"));
        assert!(app_state.toast.is_none());
        return Ok(());
    }

    #[tokio::test]
    async fn it_submits_localized_quick_actions_in_facelift() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Facelift, Language::Ar).await;

        app_state.handle_slash_commands("/support", &tx)?;
        assert_eq!(last_text(&app_state), "أحتاج مساعدة");

        app_state.handle_slash_commands("/t", &tx)?;
        assert_eq!(last_text(&app_state), "أظهر المعاملات الأخيرة");
        return Ok(());
    }

    #[tokio::test]
    async fn it_opens_identity_dialog_on_transfer() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/transfer", &tx)?;

        assert!(app_state.auth_challenge_visible);
        assert_eq!(app_state.simulator.messages().len(), 1);
        assert!(!app_state.simulator.is_composing());
        return Ok(());
    }

    #[tokio::test]
    async fn it_rejects_quick_actions_missing_from_the_variant() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/support", &tx)?;

        insta::assert_snapshot!(last_text(&app_state), @"/support isn't available in the classic chat.");
        assert!(!app_state.simulator.is_composing());
        return Ok(());
    }

    #[tokio::test]
    async fn it_submits_faq_questions() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/faq 2", &tx)?;
        assert_eq!(last_text(&app_state), "Transfer Money / تحويل الأموال");

        app_state.handle_slash_commands("/faq 9", &tx)?;
        insta::assert_snapshot!(last_text(&app_state), @"Pick a question between 1 and 5 with /faq NUMBER.");
        return Ok(());
    }

    #[tokio::test]
    async fn it_toggles_language() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/lang", &tx)?;

        assert_eq!(app_state.language, Language::Ar);
        assert_eq!(
            app_state.toast.as_ref().unwrap().title,
            "تم تغيير اللغة إلى العربية"
        );
        return Ok(());
    }

    #[tokio::test]
    async fn it_sends_attachments_to_the_actions_service() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/attach /tmp/my statement.pdf", &tx)?;

        match rx.recv().await {
            Some(Action::AttachFile(path)) => {
                assert_eq!(path, PathBuf::from("/tmp/my statement.pdf"))
            }
            _ => bail!("Wrong enum"),
        }

        app_state.handle_slash_commands("/attach", &tx)?;
        assert_eq!(last_text(&app_state), "Pass a file path with /attach PATH.");
        return Ok(());
    }

    #[tokio::test]
    async fn it_copies_the_transcript() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        app_state.submit("hello");

        app_state.handle_slash_commands("/copy", &tx)?;

        match rx.recv().await {
            Some(Action::CopyTranscript(transcript)) => {
                assert!(transcript.starts_with("Smart Assistant ("));
                assert!(transcript.contains("\n\nYou ("));
                assert!(transcript.ends_with("): hello"));
            }
            _ => bail!("Wrong enum"),
        }

        return Ok(());
    }

    #[tokio::test]
    async fn it_toggles_recording() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/record", &tx)?;
        assert!(app_state.recording);
        assert_eq!(
            app_state.toast.as_ref().unwrap().format(),
            "Recording started: Send /record again to stop recording"
        );

        app_state.toast = None;
        app_state.handle_slash_commands("/record", &tx)?;
        assert!(!app_state.recording);
        assert!(app_state.toast.is_none());
        return Ok(());
    }

    #[tokio::test]
    async fn it_picks_emoji() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/emoji", &tx)?;
        assert!(app_state.emoji_picker_visible);

        let outcome = app_state.handle_slash_commands("/emoji 2", &tx)?;
        assert_eq!(outcome, CommandOutcome::Draft("👍".to_string()));
        assert!(!app_state.emoji_picker_visible);

        let outcome = app_state.handle_slash_commands("/emoji 0", &tx)?;
        assert_eq!(outcome, CommandOutcome::Handled);
        assert_eq!(
            app_state.simulator.messages().last().unwrap().message_type(),
            MessageType::Error
        );
        return Ok(());
    }

    #[tokio::test]
    async fn it_inserts_emoji_with_alt_digits_while_picking() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        let alt = |char: char| {
            return Input {
                key: Key::Char(char),
                ctrl: false,
                alt: true,
            };
        };

        assert_eq!(app_state.emoji_for_input(&alt('2')), None);

        app_state.handle_slash_commands("/emoji", &tx)?;
        assert_eq!(app_state.emoji_for_input(&alt('2')), Some("👍"));
        assert_eq!(app_state.emoji_for_input(&alt('8')), Some("❓"));
        assert_eq!(app_state.emoji_for_input(&alt('0')), None);
        assert_eq!(app_state.emoji_for_input(&alt('9')), None);
        assert_eq!(app_state.emoji_for_input(&alt('a')), None);
        assert_eq!(
            app_state.emoji_for_input(&Input {
                key: Key::Char('2'),
                ctrl: false,
                alt: false,
            }),
            None
        );

        // Picking leaves the strip open so several emoji can be added.
        assert!(app_state.emoji_picker_visible);
        return Ok(());
    }

    #[tokio::test]
    async fn it_thanks_for_ratings() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Facelift, Language::Ar).await;

        app_state.handle_slash_commands("/rate up", &tx)?;
        assert_eq!(app_state.toast.as_ref().unwrap().title, "شكراً لتقييمك");

        app_state.handle_slash_commands("/rate sideways", &tx)?;
        assert_eq!(last_text(&app_state), "Rate with /rate up or /rate down.");
        return Ok(());
    }

    #[tokio::test]
    async fn it_connects_to_an_agent() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/agent", &tx)?;
        assert_eq!(
            app_state.toast.as_ref().unwrap().format(),
            "Connecting...: You will be connected to a live agent"
        );
        return Ok(());
    }

    #[tokio::test]
    async fn it_simulates_connectivity() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;

        app_state.handle_slash_commands("/offline", &tx)?;
        assert!(!app_state.simulator.is_online());
        assert!(!app_state.submit("hello"));
        assert_eq!(app_state.simulator.messages().len(), 1);

        // Commands still work offline.
        app_state.handle_slash_commands("/online", &tx)?;
        assert!(app_state.simulator.is_online());
        assert!(app_state.submit("hello"));
        return Ok(());
    }

    #[tokio::test]
    async fn it_collapses_quick_actions_in_facelift_only() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let (mut app_state, _events) = create_app_state(Variant::Facelift, Language::En).await;
        app_state.handle_slash_commands("/actions", &tx)?;
        assert!(!app_state.quick_actions_visible);

        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        app_state.handle_slash_commands("/actions", &tx)?;
        assert!(app_state.quick_actions_visible);
        assert_eq!(
            last_text(&app_state),
            "/actions isn't available in the classic chat."
        );
        return Ok(());
    }
}

mod overlays {
    use super::*;

    #[tokio::test]
    async fn it_verifies_identity() {
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        assert!(!app_state.verify_identity());

        app_state.auth_challenge_visible = true;
        assert!(app_state.verify_identity());
        assert!(!app_state.auth_challenge_visible);
        assert_eq!(
            app_state.toast.as_ref().unwrap().format(),
            "Verification Successful: You can now proceed"
        );
    }

    #[tokio::test]
    async fn it_dismisses_overlays() {
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        app_state.auth_challenge_visible = true;
        app_state.emoji_picker_visible = true;

        app_state.dismiss_overlays();

        assert!(!app_state.auth_challenge_visible);
        assert!(!app_state.emoji_picker_visible);
        assert!(app_state.toast.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn it_expires_toasts() {
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        app_state.file_selected("statement.pdf");
        assert_eq!(
            app_state.toast.as_ref().unwrap().format(),
            "File Uploaded: statement.pdf"
        );

        time::advance(Duration::from_millis(2900)).await;
        app_state.tick(time::Instant::now());
        assert!(app_state.toast.is_some());

        time::advance(Duration::from_millis(100)).await;
        app_state.tick(time::Instant::now());
        assert!(app_state.toast.is_none());
    }
}

mod replies {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_announces_replies_in_facelift() -> Result<()> {
        let (mut app_state, mut events) = create_app_state(Variant::Facelift, Language::En).await;
        app_state.submit("transfer");

        match events.recv().await {
            Some(Event::ReplyReady(res)) => app_state.handle_reply(res),
            _ => bail!("Wrong enum"),
        }

        assert_eq!(app_state.toast.as_ref().unwrap().title, "New message");
        return Ok(());
    }

    #[tokio::test(start_paused = true)]
    async fn it_cancels_pending_replies() -> Result<()> {
        let (mut app_state, mut events) = create_app_state(Variant::Classic, Language::En).await;
        assert!(!app_state.cancel_pending());

        app_state.submit("balance");
        assert!(app_state.cancel_pending());
        assert!(!app_state.simulator.is_composing());

        time::sleep(Duration::from_secs(5)).await;
        assert!(events.try_recv().is_err());
        assert_eq!(app_state.simulator.messages().len(), 2);
        return Ok(());
    }

    #[tokio::test]
    async fn it_lands_failures_as_notices() {
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        app_state.submit("balance");
        let request_id = app_state.simulator.messages().last().unwrap().id;

        app_state.handle_reply_failure(request_id, "timed out");

        assert_eq!(
            last_text(&app_state),
            "The assistant failed to reply with the following error: timed out"
        );
    }

    #[tokio::test]
    async fn it_follows_new_messages() {
        let (mut app_state, _events) = create_app_state(Variant::Classic, Language::En).await;
        app_state.last_known_height = 5;

        for _ in 0..5 {
            app_state.add_notice(MessageType::Normal, "hello");
        }

        assert!(app_state.scroll.position > 0);
        assert!(app_state.scroll.is_at_bottom());
    }
}
