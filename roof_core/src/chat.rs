//! # Support Chatbot
//!
//! Keyword-matched FAQ responses plus per-session statistics.
//!
//! Session state is an explicitly constructed [`ChatSession`] owned by the
//! front end and passed into the bot, with a lifecycle scoped to one user
//! session. It records user message counts and the topics touched so far.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::chat::{ChatBot, ChatSession};
//!
//! let bot = ChatBot::new();
//! let mut session = ChatSession::new();
//!
//! let reply = bot.reply(&mut session, "How long does shipping take?");
//! assert!(reply.contains("3-5 business days"));
//! assert_eq!(session.user_messages(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply used when no FAQ keyword matches
pub const DEFAULT_REPLY: &str = "I'm here to help with roofing questions! \
    Ask me about shipping, returns, materials, installation, or use our \
    roof calculator for material estimates.";

/// FAQ table in match-priority order: the first keyword contained in the
/// message wins.
const FAQ: &[(&str, &str)] = &[
    (
        "shipping",
        "We offer free shipping on orders over $500. Standard delivery takes 3-5 business days.",
    ),
    (
        "returns",
        "We accept returns within 30 days of purchase. Items must be in original condition.",
    ),
    (
        "warranty",
        "All roofing materials come with manufacturer warranty. Metal sheets: 25 years, Shingles: 20-30 years.",
    ),
    (
        "installation",
        "We provide installation guides and can recommend certified contractors in your area.",
    ),
    (
        "materials",
        "We stock metal sheets, shingles, tiles, membranes, and polycarbonate sheets for all roofing needs.",
    ),
    (
        "payment",
        "We accept all major credit cards, PayPal, and offer financing options for large orders.",
    ),
    (
        "bulk",
        "Bulk pricing available for orders over 1000 sq ft. Contact us for custom quotes.",
    ),
    (
        "technical",
        "Our technical team can help with material selection and roof calculations. Use our calculator for estimates.",
    ),
];

/// Conversation topics tracked in session statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatTopic {
    Shipping,
    Warranty,
    Installation,
    Materials,
    Pricing,
}

impl ChatTopic {
    /// All tracked topics
    pub const ALL: [ChatTopic; 5] = [
        ChatTopic::Shipping,
        ChatTopic::Warranty,
        ChatTopic::Installation,
        ChatTopic::Materials,
        ChatTopic::Pricing,
    ];

    /// Keyword that marks a message as touching this topic
    fn keyword(&self) -> &'static str {
        match self {
            ChatTopic::Shipping => "shipping",
            ChatTopic::Warranty => "warranty",
            ChatTopic::Installation => "installation",
            ChatTopic::Materials => "materials",
            ChatTopic::Pricing => "pricing",
        }
    }
}

/// Per-session chat statistics.
///
/// Constructed by the caller at session start and threaded through every
/// [`ChatBot::reply`] call, rather than living in module-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// When the session started
    started: DateTime<Utc>,

    /// Number of user messages handled so far
    user_messages: u32,

    /// Topics detected so far, each recorded once, in first-seen order
    topics: Vec<ChatTopic>,
}

impl ChatSession {
    /// Start a fresh session
    pub fn new() -> Self {
        ChatSession {
            started: Utc::now(),
            user_messages: 0,
            topics: Vec::new(),
        }
    }

    /// When the session started
    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    /// Number of user messages handled so far
    pub fn user_messages(&self) -> u32 {
        self.user_messages
    }

    /// Topics detected so far, in first-seen order
    pub fn topics(&self) -> &[ChatTopic] {
        &self.topics
    }

    /// Record a user message into the session statistics.
    fn record(&mut self, message: &str) {
        self.user_messages += 1;

        let lower = message.to_lowercase();
        for topic in ChatTopic::ALL {
            if lower.contains(topic.keyword()) && !self.topics.contains(&topic) {
                self.topics.push(topic);
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        ChatSession::new()
    }
}

/// The FAQ chatbot.
///
/// Stateless: all per-conversation state lives in the [`ChatSession`] the
/// caller passes in.
#[derive(Debug, Clone, Default)]
pub struct ChatBot;

impl ChatBot {
    pub fn new() -> Self {
        ChatBot
    }

    /// Answer a user message and record it into the session.
    ///
    /// Matching is case-insensitive keyword containment; the FAQ table
    /// order decides when a message mentions several keywords. Messages
    /// with no keyword get [`DEFAULT_REPLY`].
    pub fn reply(&self, session: &mut ChatSession, message: &str) -> &'static str {
        session.record(message);

        let lower = message.to_lowercase();
        for (keyword, response) in FAQ {
            if lower.contains(keyword) {
                return response;
            }
        }
        DEFAULT_REPLY
    }
}
