use std::time::Duration;

use tokio::time::Instant;

const TOAST_TTL: Duration = Duration::from_secs(3);

/// Short-lived notification shown in the footer. Toasts never enter the
/// conversation log.
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    created_at: Instant,
}

impl Toast {
    pub fn new(title: &str) -> Toast {
        return Toast {
            title: title.to_string(),
            description: None,
            created_at: Instant::now(),
        };
    }

    pub fn with_description(title: &str, description: &str) -> Toast {
        let mut toast = Toast::new(title);
        toast.description = Some(description.to_string());

        return toast;
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        return now.saturating_duration_since(self.created_at) >= TOAST_TTL;
    }

    pub fn format(&self) -> String {
        if let Some(description) = &self.description {
            return format!("{}: {description}", self.title);
        }

        return self.title.to_string();
    }
}
