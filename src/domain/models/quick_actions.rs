#[cfg(test)]
#[path = "quick_actions_test.rs"]
mod tests;

use strum::EnumIter;
use strum::IntoEnumIterator;

use super::Language;
use super::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum QuickAction {
    Balance,
    Transactions,
    Transfer,
    Support,
}

/// What a quick action does once triggered. Quick actions never go through
/// the reply policy themselves; they either feed an utterance into the normal
/// submit path or open a dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuickActionOutcome {
    Submit(String),
    OpenAuthChallenge,
    Unavailable,
}

impl QuickAction {
    pub fn for_variant(variant: Variant) -> Vec<QuickAction> {
        match variant {
            Variant::Classic => {
                return vec![
                    QuickAction::Balance,
                    QuickAction::Transactions,
                    QuickAction::Transfer,
                ]
            }
            Variant::Facelift => {
                return vec![
                    QuickAction::Balance,
                    QuickAction::Transfer,
                    QuickAction::Transactions,
                    QuickAction::Support,
                ]
            }
        }
    }

    pub fn parse(command: &str) -> Option<QuickAction> {
        return QuickAction::iter().find(|e| return e.command() == command);
    }

    pub fn command(&self) -> &'static str {
        match self {
            QuickAction::Balance => return "/balance",
            QuickAction::Transactions => return "/transactions",
            QuickAction::Transfer => return "/transfer",
            QuickAction::Support => return "/support",
        }
    }

    pub fn label(&self, variant: Variant, language: Language) -> &'static str {
        let (en, ar) = match (variant, self) {
            (Variant::Classic, QuickAction::Balance) => ("View Balance", "عرض الرصيد"),
            (Variant::Classic, QuickAction::Transactions) => {
                ("Recent Transactions", "المعاملات الأخيرة")
            }
            (Variant::Classic, QuickAction::Transfer) => ("Transfer Funds", "تحويل الأموال"),
            (Variant::Facelift, QuickAction::Balance) => ("Balance", "الرصيد"),
            (Variant::Facelift, QuickAction::Transactions) => ("History", "المعاملات"),
            (Variant::Facelift, QuickAction::Transfer) => ("Transfer", "تحويل"),
            (_, QuickAction::Support) => ("Support", "دعم"),
        };

        match language {
            Language::En => return en,
            Language::Ar => return ar,
        }
    }

    pub fn resolve(&self, variant: Variant, language: Language) -> QuickActionOutcome {
        if !QuickAction::for_variant(variant).contains(self) {
            return QuickActionOutcome::Unavailable;
        }

        let utterance = match (variant, self, language) {
            (_, QuickAction::Transfer, _) => return QuickActionOutcome::OpenAuthChallenge,
            // The classic shell always injects the English utterance.
            (Variant::Classic, QuickAction::Balance, _) => "Check my account balance",
            (Variant::Classic, QuickAction::Transactions, _) => "Show recent transactions",
            (Variant::Facelift, QuickAction::Balance, Language::En) => "Check my account balance",
            (Variant::Facelift, QuickAction::Balance, Language::Ar) => "أريد معرفة رصيد حسابي",
            (Variant::Facelift, QuickAction::Transactions, Language::En) => {
                "Show recent transactions"
            }
            (Variant::Facelift, QuickAction::Transactions, Language::Ar) => {
                "أظهر المعاملات الأخيرة"
            }
            (_, QuickAction::Support, Language::En) => "I need help",
            (_, QuickAction::Support, Language::Ar) => "أحتاج مساعدة",
        };

        return QuickActionOutcome::Submit(utterance.to_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faq {
    pub id: usize,
    pub question: String,
    pub category: String,
}

impl Faq {
    fn new(id: usize, question: &str, category: &str) -> Faq {
        return Faq {
            id,
            question: question.to_string(),
            category: category.to_string(),
        };
    }

    pub fn list(variant: Variant, language: Language) -> Vec<Faq> {
        if variant == Variant::Classic {
            return vec![
                Faq::new(1, "Check Account Balance / رصيد الحساب", "balance"),
                Faq::new(2, "Transfer Money / تحويل الأموال", "transfer"),
                Faq::new(3, "Recent Transactions / المعاملات الأخيرة", "transactions"),
                Faq::new(4, "Open New Account / فتح حساب جديد", "account"),
                Faq::new(
                    5,
                    "Credit Card Info / معلومات البطاقة الائتمانية",
                    "cards",
                ),
            ];
        }

        let questions = match language {
            Language::En => [
                "Account Balance",
                "Transfer Money",
                "Recent Transactions",
                "Open New Account",
                "Credit Card Info",
            ],
            Language::Ar => [
                "رصيد الحساب",
                "تحويل الأموال",
                "المعاملات الأخيرة",
                "فتح حساب جديد",
                "بطاقة ائتمانية",
            ],
        };
        let categories = ["balance", "transfer", "transactions", "account", "cards"];

        return questions
            .iter()
            .zip(categories.iter())
            .enumerate()
            .map(|(idx, (question, category))| {
                return Faq::new(idx + 1, question, category);
            })
            .collect();
    }

    /// Looks up a FAQ by its 1-based position.
    pub fn get(variant: Variant, language: Language, position: usize) -> Option<Faq> {
        return Faq::list(variant, language)
            .into_iter()
            .find(|faq| return faq.id == position);
    }
}
