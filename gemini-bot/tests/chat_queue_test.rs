//! Tests for [`ChatQueues`]: per-chat arrival order and cross-chat concurrency.

use std::sync::Arc;
use std::time::Duration;

use gemini_bot::replies;
use gemini_bot::{
    build_handler_chain, process_message, ChatQueues, ConversationManager, HandlerChain,
    SessionScope,
};
use llm_client::ChatMessage;
use tokio::sync::RwLock;

mod common;
use common::{fake_llm, make_message, FakeLlm, MockBot};

const CHAT: i64 = 1;

fn chain(llm: Arc<FakeLlm>) -> HandlerChain {
    let conversations = Arc::new(ConversationManager::new(
        llm,
        SessionScope::PerChat,
        Duration::from_secs(10),
    ));
    build_handler_chain(conversations, Arc::new(RwLock::new(None)))
}

/// **Test: "/clear" enqueued right before "Hello" always clears first.**
///
/// **Setup:** Chat with one prior exchange; multi-threaded runtime; repeated 100 times.
/// **Action:** Enqueue "/clear" then "Hello" without waiting in between.
/// **Expected:** Replies arrive in order; the "Hello" request carries no prior turns.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_clear_then_text_keeps_arrival_order() {
    for _ in 0..100 {
        let llm = fake_llm();
        let chain = chain(llm.clone());
        let bot = Arc::new(MockBot::new());
        process_message(&chain, bot.as_ref(), &make_message(CHAT, "earlier")).await;

        let queues = ChatQueues::new(chain, bot.clone());
        queues.enqueue(make_message(CHAT, "/clear"));
        queues.enqueue(make_message(CHAT, "Hello"));
        bot.wait_for_sent(3).await;

        assert_eq!(
            bot.texts(),
            vec![
                "reply 1".to_string(),
                replies::CLEARED.to_string(),
                "reply 2".to_string()
            ]
        );
        assert_eq!(llm.calls()[1], vec![ChatMessage::user("Hello")]);
    }
}

/// **Test: Many messages on one chat reach the model in arrival order.**
///
/// **Expected:** Each request carries every earlier exchange: 1, 3, 5, 7, 9 messages.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_messages_of_one_chat_are_processed_in_order() {
    let llm = Arc::new(FakeLlm::with_delay(Duration::from_millis(10)));
    let bot = Arc::new(MockBot::new());
    let queues = ChatQueues::new(chain(llm.clone()), bot.clone());

    for i in 0..5 {
        queues.enqueue(make_message(CHAT, &format!("message {}", i)));
    }
    bot.wait_for_sent(5).await;

    let calls = llm.calls();
    let lens: Vec<usize> = calls.iter().map(|c| c.len()).collect();
    assert_eq!(lens, vec![1, 3, 5, 7, 9]);
    assert_eq!(calls[4][8], ChatMessage::user("message 4"));
    assert_eq!(queues.queue_count(), 1);
}

/// **Test: A slow model call on one chat does not hold up another chat.**
///
/// **Setup:** Model takes 3 seconds per call.
/// **Action:** Enqueue "Hello" on chat 1, then "/start" on chat 2.
/// **Expected:** The greeting for chat 2 is sent while chat 1 still waits on the model.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_chats_do_not_block_each_other() {
    let llm = Arc::new(FakeLlm::with_delay(Duration::from_secs(3)));
    let bot = Arc::new(MockBot::new());
    let queues = ChatQueues::new(chain(llm.clone()), bot.clone());

    queues.enqueue(make_message(1, "Hello"));
    queues.enqueue(make_message(2, "/start"));

    tokio::time::timeout(Duration::from_secs(1), bot.wait_for_sent(1))
        .await
        .unwrap();
    assert_eq!(bot.sent(), vec![(2, replies::GREETING.to_string())]);
    assert_eq!(queues.queue_count(), 2);
}
