pub fn bilingual_fixture() -> &'static str {
    return r#"
Your current account balance is ₹ 45,230.50. Is there anything specific you'd like to know about your account?

رصيدك الحالي هو ₹ 45,230.50. هل تود معرفة أي معلومات إضافية؟
"#
    .trim();
}

pub fn long_line_fixture() -> &'static str {
    return "I would like to transfer money from my savings account to my brother's account at another bank before the end of the week";
}
