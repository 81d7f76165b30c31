#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::text_width;
use crate::domain::models::Author;
use crate::domain::models::Language;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

impl BubbleAlignment {
    /// User messages sit on the trailing side, which flips for right to left
    /// locales.
    pub fn for_author(author: Author, language: Language) -> BubbleAlignment {
        let trailing = match language {
            Language::En => BubbleAlignment::Right,
            Language::Ar => BubbleAlignment::Left,
        };

        if author == Author::User {
            return trailing;
        }

        if trailing == BubbleAlignment::Right {
            return BubbleAlignment::Left;
        }
        return BubbleAlignment::Right;
    }
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    language: Language,
    palette: Palette,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        language: Language,
        palette: Palette,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment: BubbleAlignment::for_author(message.author, language),
            message,
            language,
            palette,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();
        let lines = self
            .message
            .as_string_lines(max_line_length)
            .into_iter()
            .map(|line| return self.text_to_line(line, max_line_length))
            .collect::<Vec<Line>>();

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn text_to_line(&self, text: String, max_line_length: usize) -> Line<'static> {
        let fill = " ".repeat(max_line_length.saturating_sub(text_width(&text)));
        let mut spans = vec![
            self.border_span("│ ".to_string()),
            Span::styled(text, self.text_style()),
            self.border_span(format!("{fill} │")),
        ];

        let outer_padding = Span::from(" ".repeat(self.outer_padding_length(max_line_length)));
        if self.alignment == BubbleAlignment::Left {
            spans.push(outer_padding);
        } else {
            spans.insert(0, outer_padding);
        }

        return Line::from(spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;
        let available = self.window_max_width.saturating_sub(line_border_width);

        let longest = self
            .message
            .text
            .lines()
            .map(|line| return text_width(line))
            .max()
            .unwrap_or(0)
            .min(available);

        let label_width = text_width(self.label());
        let time_width = text_width(&self.message.time_label()) + 1;

        return longest.max(label_width).max(time_width);
    }

    fn outer_padding_length(&self, max_line_length: usize) -> usize {
        return self
            .window_max_width
            .saturating_sub(max_line_length + Bubble::style_config().bubble_padding);
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        // Add 2 for the inner padding.
        let inner_length = max_line_length + 2;
        let label = self.label();
        let time = self.message.time_label();

        let top_fill = "─".repeat(inner_length.saturating_sub(text_width(label)));
        let bottom_fill = "─".repeat(inner_length.saturating_sub(text_width(&time) + 1));
        let top_bar = format!("╭{label}{top_fill}╮");
        let bottom_bar = format!("╰{bottom_fill}{time}─╯");

        let outer_padding = " ".repeat(self.outer_padding_length(max_line_length));

        let mut res = vec![self.border_line(top_bar, &outer_padding)];
        res.extend(lines);
        res.push(self.border_line(bottom_bar, &outer_padding));

        return res;
    }

    fn label(&self) -> &'static str {
        return self.message.author.label(self.language);
    }

    fn border_style(&self) -> Style {
        if self.message.message_type() == MessageType::Error {
            return Style::default().fg(self.palette.error);
        }

        match self.message.author {
            Author::User => return Style::default().fg(self.palette.primary),
            Author::Assistant => return Style::default().fg(self.palette.accent),
            Author::Notice => return Style::default().fg(self.palette.muted),
        }
    }

    fn text_style(&self) -> Style {
        if self.message.message_type() == MessageType::Error {
            return Style::default().fg(self.palette.error);
        }

        return Style::default();
    }

    fn border_span(&self, text: String) -> Span<'static> {
        return Span::styled(text, self.border_style());
    }

    fn border_line(&self, bar: String, outer_padding: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            return Line::from(vec![
                self.border_span(bar),
                Span::from(outer_padding.to_string()),
            ]);
        }

        return Line::from(vec![
            Span::from(outer_padding.to_string()),
            self.border_span(bar),
        ]);
    }
}
