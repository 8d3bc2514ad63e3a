//! The `!fpv` request pipeline: search, complete, decorate, deliver.

use crate::flavor;
use crate::llm::ChatCompletion;
use crate::reply::{deliver, MessageSink};
use crate::search::WebSearch;
use crate::Error;
use tracing::info;

/// Look up trusted sources for `question` and ask the model, returning the undecorated answer.
pub async fn answer<S, C>(search: &S, llm: &C, question: &str) -> String
where
    S: WebSearch + ?Sized,
    C: ChatCompletion + ?Sized,
{
    let context = search.search(question).await.into_context();
    llm.complete(question, &context).await
}

/// Run one invocation end to end, showing typing until the reply is out.
/// Only delivery failures surface as errors.
pub async fn run<S, C, K>(search: &S, llm: &C, sink: &K, question: &str) -> Result<(), Error>
where
    S: WebSearch + ?Sized,
    C: ChatCompletion + ?Sized,
    K: MessageSink + ?Sized,
{
    let typing = sink.start_typing();
    let answer = answer(search, llm, question).await;
    let decorated = flavor::decorate(&answer, &mut rand::rng());
    let delivered = deliver(sink, &decorated).await;
    drop(typing);
    delivered?;
    info!("Answered FPV question ({} chars)", decorated.chars().count());
    Ok(())
}
