use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Faq;
use crate::domain::models::Language;
use crate::domain::models::Phrase;
use crate::domain::models::QuickAction;
use crate::domain::models::TextArea;
use crate::domain::models::TypingIndicator;
use crate::domain::models::EMOJIS;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::CommandOutcome;

fn alignment(language: Language) -> Alignment {
    match language {
        Language::En => return Alignment::Left,
        Language::Ar => return Alignment::Right,
    }
}

fn type_text(textarea: &mut tui_textarea::TextArea, text: &str) {
    for char in text.chars() {
        let key = match char {
            '\n' => Key::Enter,
            _ => Key::Char(char),
        };

        textarea.input(Input {
            key,
            ctrl: false,
            alt: false,
        });
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = app_state.variant.palette();
    let language = app_state.language;

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app_state.account.initial()),
            Style::default().fg(Color::White).bg(palette.primary),
        ),
        Span::styled(
            format!(" {} ", Phrase::Title.text(language)),
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw(app_state.account.customer_name.to_string()),
        Span::styled(
            format!("  [{}: Ctrl+L]", language.toggle_label()),
            Style::default().fg(palette.muted),
        ),
    ];

    if app_state.recording {
        spans.push(Span::styled(" ● REC", Style::default().fg(palette.error)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(alignment(language)),
        rect,
    );
}

fn render_account<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = app_state.variant.palette();
    let language = app_state.language;
    let account = &app_state.account;

    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", Phrase::AvailableBalance.text(language)),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            account.balance.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}: ", Phrase::AccountNumber.text(language)),
            Style::default().fg(palette.muted),
        ),
        Span::raw(account.account_number.to_string()),
        Span::styled(
            format!("  {}: ", Phrase::LastLogin.text(language)),
            Style::default().fg(palette.muted),
        ),
        Span::raw(account.last_login.to_string()),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(alignment(language))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.primary))
                    .title(Phrase::AccountSummary.text(language)),
            ),
        rect,
    );
}

fn render_shortcuts<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = app_state.variant.palette();
    let language = app_state.language;
    let variant = app_state.variant;

    let mut lines = vec![];
    if app_state.quick_actions_visible {
        let actions = QuickAction::for_variant(variant)
            .iter()
            .map(|action| {
                return format!("{} {}", action.command(), action.label(variant, language));
            })
            .collect::<Vec<String>>()
            .join(" · ");

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", Phrase::QuickActions.text(language)),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(actions),
        ]));
    }

    let faqs = Faq::list(variant, language)
        .iter()
        .map(|faq| return format!("{}. {}", faq.id, faq.question))
        .collect::<Vec<String>>()
        .join(" · ");

    lines.push(Line::from(vec![
        Span::styled(
            format!("{} (/faq N): ", Phrase::FaqTitle.text(language)),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(faqs, Style::default().fg(palette.muted)),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(alignment(language))
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn render_emoji_strip<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    let strip = EMOJIS
        .iter()
        .enumerate()
        .map(|(idx, emoji)| return format!("{} {emoji}", idx + 1))
        .collect::<Vec<String>>()
        .join("  ");

    frame.render_widget(Paragraph::new(format!("Alt+N, /emoji N: {strip}")), rect);
}

fn render_footer<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = app_state.variant.palette();
    let language = app_state.language;

    let footer = match &app_state.toast {
        Some(toast) => Paragraph::new(format!("🔔 {}", toast.format()))
            .style(Style::default().fg(Color::White).bg(palette.primary)),
        None => Paragraph::new(format!(
            "🔒 {} · /help {}",
            Phrase::Privacy.text(language),
            Phrase::Help.text(language)
        ))
        .style(Style::default().fg(palette.muted)),
    };

    frame.render_widget(footer.alignment(alignment(language)), rect);
}

fn render_auth_dialog<B: Backend>(frame: &mut Frame<B>, app_state: &AppState) {
    let palette = app_state.variant.palette();
    let language = app_state.language;
    let rect = centered_rect(60, 9, frame.size());

    let text = vec![
        Line::from(app_state.variant.verify_description().text(language)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[Enter] {}", Phrase::VerifyBiometrics.text(language)),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!("[Esc] {}", Phrase::Cancel.text(language)),
                Style::default().fg(palette.muted),
            ),
        ]),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.primary))
                    .title(format!("🛡 {}", Phrase::VerifyTitle.text(language))),
            ),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(event_rx);
    let mut textarea = TextArea::default();
    let typing = TypingIndicator::default();

    #[cfg(feature = "dev")]
    {
        type_text(&mut textarea, "What is my account balance?");
    }

    loop {
        textarea.set_block(TextArea::block(
            app_state.language,
            app_state.simulator.is_online(),
        ));

        terminal.draw(|frame| {
            let mut constraints = vec![];
            if !app_state.simulator.is_online() {
                constraints.push(Constraint::Length(1));
            }
            constraints.extend([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ]);
            if app_state.simulator.is_composing() {
                constraints.push(Constraint::Length(1));
            }
            if app_state.emoji_picker_visible {
                constraints.push(Constraint::Length(1));
            }
            constraints.extend([Constraint::Max(4), Constraint::Length(1)]);

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.size());

            let palette = app_state.variant.palette();
            let mut idx = 0;

            if !app_state.simulator.is_online() {
                frame.render_widget(
                    Paragraph::new(format!(
                        "📡 {}",
                        Phrase::OfflineBanner.text(app_state.language)
                    ))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::White).bg(palette.error)),
                    layout[idx],
                );
                idx += 1;
            }

            render_header(frame, layout[idx], app_state);
            render_account(frame, layout[idx + 1], app_state);
            render_shortcuts(frame, layout[idx + 2], app_state);

            let chat_rect = layout[idx + 3];
            if chat_rect.width != app_state.last_known_width
                || chat_rect.height != app_state.last_known_height
            {
                app_state.set_rect(chat_rect);
            }

            app_state
                .bubble_list
                .render(frame, chat_rect, app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                chat_rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );
            idx += 4;

            if app_state.simulator.is_composing() {
                typing.render(frame, layout[idx], app_state.language, palette);
                idx += 1;
            }

            if app_state.emoji_picker_visible {
                render_emoji_strip(frame, layout[idx]);
                idx += 1;
            }

            frame.render_widget(textarea.widget(), layout[idx]);
            render_footer(frame, layout[idx + 1], app_state);

            if app_state.auth_challenge_visible {
                render_auth_dialog(frame, app_state);
            }
        })?;

        match events.next().await? {
            Event::ConnectivityChanged(online) => {
                app_state.set_connectivity(online);
            }
            Event::FileSelected(name) => {
                app_state.file_selected(&name);
            }
            Event::KeyboardCharInput(input) => {
                if app_state.auth_challenge_visible {
                    continue;
                }

                match app_state.emoji_for_input(&input) {
                    Some(emoji) => type_text(&mut textarea, emoji),
                    None => {
                        textarea.input(input);
                    }
                }
            }
            Event::KeyboardCTRLC() => {
                if !app_state.cancel_pending() {
                    break;
                }
            }
            Event::KeyboardCTRLL() => {
                app_state.toggle_language();
            }
            Event::KeyboardEnter() => {
                if app_state.verify_identity() {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                match app_state.handle_slash_commands(&input_str, &tx)? {
                    CommandOutcome::Quit => {
                        break;
                    }
                    CommandOutcome::Handled => {
                        textarea = TextArea::default();
                    }
                    CommandOutcome::Draft(text) => {
                        textarea = TextArea::default();
                        type_text(&mut textarea, &text);
                    }
                    CommandOutcome::NotCommand => {
                        // Offline submissions keep the draft.
                        if app_state.submit(&input_str) {
                            textarea = TextArea::default();
                        }
                    }
                }
            }
            Event::KeyboardEsc() => {
                app_state.dismiss_overlays();
            }
            Event::KeyboardPaste(text) => {
                if !app_state.auth_challenge_visible {
                    type_text(&mut textarea, &text);
                }
            }
            Event::Notice(mtype, text) => {
                app_state.add_notice(mtype, &text);
            }
            Event::ReplyFailed(request_id, err) => {
                app_state.handle_reply_failure(request_id, &err);
            }
            Event::ReplyReady(res) => {
                app_state.handle_reply(res);
            }
            Event::TranscriptCopied() => {
                app_state.transcript_copied();
            }
            Event::UITick() => {
                app_state.tick(Instant::now());
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let props = AppStateProps::from_config()?;
    let mut app_state = AppState::new(props, event_tx).await;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, action_tx, event_rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
