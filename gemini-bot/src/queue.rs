//! Per-chat message queues.
//!
//! Each chat gets an unbounded FIFO channel drained by its own task, so messages of one chat
//! are processed strictly in arrival order (a `/clear` always lands before the text sent after
//! it) while different chats run concurrently. A queue and its task live as long as the
//! [`ChatQueues`] that created them.

use crate::chain::HandlerChain;
use crate::core::{Bot, Message};
use crate::runner::process_message;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

type QueueSender = mpsc::UnboundedSender<Message>;

pub struct ChatQueues {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
    queues: DashMap<i64, QueueSender>,
}

impl ChatQueues {
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>) -> Self {
        Self {
            chain,
            bot,
            queues: DashMap::new(),
        }
    }

    /// Appends `message` to its chat's queue, starting the queue on first use. Never waits.
    pub fn enqueue(&self, message: Message) {
        let chat_id = message.chat.id;
        let tx = self
            .queues
            .entry(chat_id)
            .or_insert_with(|| self.spawn_queue(chat_id))
            .clone();

        if let Err(mpsc::error::SendError(message)) = tx.send(message) {
            warn!(chat_id, "Chat queue closed, restarting it");
            let tx = self.spawn_queue(chat_id);
            self.queues.insert(chat_id, tx.clone());
            if tx.send(message).is_err() {
                error!(chat_id, "Failed to enqueue message");
            }
        }
    }

    /// Number of chats with a live queue.
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    fn spawn_queue(&self, chat_id: i64) -> QueueSender {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(process_queue_loop(
            rx,
            self.chain.clone(),
            self.bot.clone(),
            chat_id,
        ));
        tx
    }
}

async fn process_queue_loop(
    mut rx: mpsc::UnboundedReceiver<Message>,
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
    chat_id: i64,
) {
    while let Some(message) = rx.recv().await {
        debug!(chat_id, message_id = %message.id, "Processing queued message");
        process_message(&chain, bot.as_ref(), &message).await;
    }
}
