use rand::seq::IndexedRandom;
use rand::Rng;

use super::state::TextInput;
use crate::content;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn assistant(text: &str) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.to_string(),
        }
    }
}

/// Simulated assistant conversation. One transcript per session, shared
/// by every project.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    pub input: TextInput,
    pending_replies: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(content::CHAT_GREETING)],
            input: TextInput::new(),
            pending_replies: 0,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Append the user's message. Returns false for blank text; the caller
    /// schedules one reply per accepted message.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            text: text.to_string(),
        });
        self.pending_replies += 1;
        true
    }

    /// Send whatever is in the input box and clear it on success.
    pub fn send_input(&mut self) -> bool {
        let text = self.input.value.clone();
        let sent = self.send(&text);
        if sent {
            self.input.clear();
        }
        sent
    }

    pub fn receive_reply(&mut self, reply: &str) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.transcript.push(ChatMessage::assistant(reply));
    }

    /// Back to the greeting. Replies still in flight land after it.
    pub fn clear(&mut self) {
        self.transcript = vec![ChatMessage::assistant(content::CHAT_GREETING)];
    }

    /// Fill the input with a random sample question.
    pub fn suggest_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.input = TextInput::from_str(pick_sample_question(rng));
    }
}

pub fn pick_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    content::CHAT_REPLIES
        .choose(rng)
        .copied()
        .unwrap_or(content::CHAT_GREETING)
}

pub fn pick_sample_question<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    content::SAMPLE_QUESTIONS
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_with_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].role, ChatRole::Assistant);
        assert_eq!(chat.transcript()[0].text, content::CHAT_GREETING);
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut chat = ChatSession::new();
        assert!(!chat.send("   "));
        assert!(!chat.send(""));
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.pending_replies(), 0);
    }

    #[test]
    fn user_messages_are_trimmed_and_counted() {
        let mut chat = ChatSession::new();
        chat.input = TextInput::from_str("  hi ");
        assert!(chat.send_input());
        assert!(chat.input.value.is_empty());
        assert_eq!(chat.transcript()[1].text, "hi");
        assert_eq!(chat.pending_replies(), 1);

        chat.receive_reply("ok");
        assert_eq!(chat.pending_replies(), 0);
        assert_eq!(chat.transcript()[2].role, ChatRole::Assistant);
    }

    #[test]
    fn clear_resets_to_greeting() {
        let mut chat = ChatSession::new();
        chat.send("hello");
        chat.receive_reply("world");
        chat.clear();
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].text, content::CHAT_GREETING);
    }

    #[test]
    fn replies_come_from_canned_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(content::CHAT_REPLIES.contains(&pick_reply(&mut rng)));
        }
    }

    #[test]
    fn suggestion_fills_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut chat = ChatSession::new();
        chat.suggest_question(&mut rng);
        assert!(content::SAMPLE_QUESTIONS.contains(&chat.input.value.as_str()));
        assert_eq!(chat.input.cursor, chat.input.value.len());
    }
}
