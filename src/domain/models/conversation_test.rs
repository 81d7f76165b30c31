use super::Conversation;
use super::GREETING;
use crate::domain::models::Author;
use crate::domain::models::MessageType;

#[test]
fn it_seeds_a_greeting() {
    let conversation = Conversation::default();

    assert_eq!(conversation.len(), 1);
    let greeting = conversation.last().unwrap();
    assert_eq!(greeting.id, 1);
    assert_eq!(greeting.author, Author::Assistant);
    assert_eq!(greeting.text, GREETING);
}

#[test]
fn it_assigns_increasing_ids() {
    let mut conversation = Conversation::default();
    conversation.push(Author::User, MessageType::Normal, "Check my balance");
    conversation.push(Author::Assistant, MessageType::Normal, "Your balance is...");
    conversation.push(Author::Notice, MessageType::Error, "Oops");

    let ids = conversation
        .messages()
        .iter()
        .map(|message| return message.id)
        .collect::<Vec<u64>>();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn it_keeps_creation_order() {
    let mut conversation = Conversation::default();
    for idx in 0..10 {
        conversation.push(Author::User, MessageType::Normal, &format!("message {idx}"));
    }

    let messages = conversation.messages();
    for pair in messages.windows(2) {
        assert!(pair[0].id < pair[1].id);
        assert!(pair[0].created_at <= pair[1].created_at);
    }
    assert_eq!(messages[10].text, "message 9");
}

#[test]
fn it_returns_the_pushed_message() {
    let mut conversation = Conversation::default();
    let message = conversation.push(Author::User, MessageType::Normal, "hello");

    assert_eq!(message.id, 2);
    assert_eq!(message.text, "hello");
}
