use super::Language;

/// Every fixed string the chat shell displays, in both supported locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phrase {
    AccountNumber,
    AccountSummary,
    AuthorNotice,
    AuthorUser,
    AvailableBalance,
    Cancel,
    Connecting,
    CopiedTranscript,
    FaqTitle,
    FeedbackDetail,
    FeedbackThanks,
    FileUploaded,
    Help,
    InputPlaceholder,
    LanguageSwitched,
    LastLogin,
    LiveAgent,
    LiveAgentDetail,
    NewMessage,
    OfflineBanner,
    OfflinePlaceholder,
    Privacy,
    QuickActions,
    RecordingHint,
    RecordingStarted,
    Send,
    Thinking,
    Title,
    VerifyBiometrics,
    VerifyDescription,
    VerifyDescriptionSensitive,
    VerifyProceed,
    VerifySuccess,
    VerifyTitle,
}

impl Phrase {
    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Phrase::AccountNumber => return ("Account Number", "رقم الحساب"),
            Phrase::AccountSummary => return ("Account Summary", "ملخص الحساب"),
            Phrase::AuthorNotice => return ("Notice", "تنبيه"),
            Phrase::AuthorUser => return ("You", "أنت"),
            Phrase::AvailableBalance => return ("Available Balance", "الرصيد المتاح"),
            Phrase::Cancel => return ("Cancel", "إلغاء"),
            Phrase::Connecting => return ("Connecting...", "جاري التوصيل..."),
            Phrase::CopiedTranscript => {
                return ("Copied chat log to clipboard", "تم نسخ المحادثة")
            }
            Phrase::FaqTitle => return ("Frequently Asked Questions", "الأسئلة الشائعة"),
            Phrase::FeedbackDetail => {
                return (
                    "We'll use this to improve our service",
                    "سنعمل على تحسين خدماتنا",
                )
            }
            Phrase::FeedbackThanks => return ("Thank you for your feedback", "شكراً لتقييمك"),
            Phrase::FileUploaded => return ("File Uploaded", "تم رفع الملف"),
            Phrase::Help => return ("Help", "المساعدة"),
            Phrase::InputPlaceholder => {
                return ("Type your message here...", "اكتب رسالتك هنا...")
            }
            // Announced in the language being switched to.
            Phrase::LanguageSwitched => {
                return ("Language switched to English", "تم تغيير اللغة إلى العربية")
            }
            Phrase::LastLogin => return ("Last Login", "آخر دخول"),
            Phrase::LiveAgent => return ("Talk to Live Agent", "التحدث مع مندوب"),
            Phrase::LiveAgentDetail => {
                return (
                    "You will be connected to a live agent",
                    "سيتم توصيلك بممثل خدمة العملاء",
                )
            }
            Phrase::NewMessage => return ("New message", "رسالة جديدة"),
            Phrase::OfflineBanner => {
                return (
                    "You're offline - chat is in read-only mode",
                    "أنت غير متصل - الدردشة في وضع القراءة فقط",
                )
            }
            Phrase::OfflinePlaceholder => {
                return ("Offline - commands only", "غير متصل - الأوامر فقط")
            }
            Phrase::Privacy => return ("Privacy", "الخصوصية"),
            Phrase::QuickActions => return ("Quick Actions", "الإجراءات السريعة"),
            Phrase::RecordingHint => {
                return (
                    "Send /record again to stop recording",
                    "اضغط مرة أخرى لإيقاف التسجيل",
                )
            }
            Phrase::RecordingStarted => return ("Recording started", "بدء التسجيل"),
            Phrase::Send => return ("Send", "إرسال"),
            Phrase::Thinking => return ("Thinking...", "يكتب..."),
            Phrase::Title => return ("Smart Assistant", "المساعد الذكي"),
            Phrase::VerifyBiometrics => return ("Verify with Biometrics", "تحقق بالبصمة"),
            Phrase::VerifyDescription => {
                return (
                    "For your security, please verify your identity to complete this transaction",
                    "لأمانك، يرجى تأكيد هويتك لإتمام هذه العملية",
                )
            }
            Phrase::VerifyDescriptionSensitive => {
                return (
                    "For your security, please verify your identity to complete this sensitive transaction",
                    "لأمانك، يرجى تأكيد هويتك لإتمام هذه العملية الحساسة",
                )
            }
            Phrase::VerifyProceed => return ("You can now proceed", "يمكنك الآن المتابعة"),
            Phrase::VerifySuccess => return ("Verification Successful", "تم التحقق بنجاح"),
            Phrase::VerifyTitle => return ("Identity Verification", "تأكيد الهوية"),
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        let (en, ar) = self.pair();
        match language {
            Language::En => return en,
            Language::Ar => return ar,
        }
    }
}

/// Emoji offered by the picker strip, addressed 1-based by `/emoji N`.
pub const EMOJIS: [&str; 8] = ["😊", "👍", "🙏", "💳", "💰", "🏦", "✅", "❓"];
