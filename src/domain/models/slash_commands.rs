#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

use super::QuickAction;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .split_whitespace()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.quick_action().is_some()
            || cmd.is_faq()
            || cmd.is_language()
            || cmd.is_agent()
            || cmd.is_attach()
            || cmd.is_record()
            || cmd.is_emoji()
            || cmd.is_rate()
            || cmd.is_copy()
            || cmd.is_offline()
            || cmd.is_online()
            || cmd.is_toggle_actions()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn quick_action(&self) -> Option<QuickAction> {
        match self.command.as_str() {
            "/b" => return Some(QuickAction::Balance),
            "/t" => return Some(QuickAction::Transactions),
            command => return QuickAction::parse(command),
        }
    }

    pub fn is_faq(&self) -> bool {
        return ["/f", "/faq"].contains(&self.command.as_str());
    }

    pub fn is_language(&self) -> bool {
        return ["/l", "/lang", "/language"].contains(&self.command.as_str());
    }

    pub fn is_agent(&self) -> bool {
        return ["/agent"].contains(&self.command.as_str());
    }

    pub fn is_attach(&self) -> bool {
        return ["/attach"].contains(&self.command.as_str());
    }

    pub fn is_record(&self) -> bool {
        return ["/record", "/mic"].contains(&self.command.as_str());
    }

    pub fn is_emoji(&self) -> bool {
        return ["/emoji"].contains(&self.command.as_str());
    }

    pub fn is_rate(&self) -> bool {
        return ["/rate"].contains(&self.command.as_str());
    }

    pub fn is_copy(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str());
    }

    pub fn is_offline(&self) -> bool {
        return ["/offline"].contains(&self.command.as_str());
    }

    pub fn is_online(&self) -> bool {
        return ["/online"].contains(&self.command.as_str());
    }

    pub fn is_toggle_actions(&self) -> bool {
        return ["/actions"].contains(&self.command.as_str());
    }

    /// First argument parsed as a 1-based position, as used by `/faq` and
    /// `/emoji`.
    pub fn position_arg(&self) -> Option<usize> {
        return self.args.first().and_then(|arg| return arg.parse::<usize>().ok());
    }

    /// Arguments joined back together, keeping paths with spaces intact.
    pub fn rest(&self) -> String {
        return self.args.join(" ");
    }
}
