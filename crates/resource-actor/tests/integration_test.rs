use async_trait::async_trait;
use resource_actor::{ActorResource, FrameworkError, ResourceActor};

// --- Test Resource ---

/// A shelf of labelled jars, first in first out.
#[derive(Debug, Default)]
struct JarShelf {
    jars: Vec<String>,
}

#[derive(Debug)]
enum ShelfAction {
    Put(String),
    Take,
}

#[derive(Debug)]
enum ShelfQuery {
    Labels,
}

#[derive(Debug, PartialEq)]
enum ShelfActionResult {
    Put(usize),
    Take(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum ShelfError {
    #[error("Shelf is empty")]
    Empty,
    #[error("Shelf refused to open")]
    Jammed,
}

#[async_trait]
impl ActorResource for JarShelf {
    type Action = ShelfAction;
    type ActionResult = ShelfActionResult;
    type Query = ShelfQuery;
    type QueryResult = Vec<String>;
    type Context = ();
    type Error = ShelfError;

    async fn handle_action(
        &mut self,
        action: ShelfAction,
        _ctx: &Self::Context,
    ) -> Result<ShelfActionResult, Self::Error> {
        match action {
            ShelfAction::Put(label) => {
                self.jars.push(label);
                Ok(ShelfActionResult::Put(self.jars.len()))
            }
            ShelfAction::Take => {
                if self.jars.is_empty() {
                    return Err(ShelfError::Empty);
                }
                Ok(ShelfActionResult::Take(self.jars.remove(0)))
            }
        }
    }

    async fn handle_query(
        &self,
        _query: ShelfQuery,
        _ctx: &Self::Context,
    ) -> Result<Vec<String>, Self::Error> {
        Ok(self.jars.clone())
    }

    fn size(&self) -> usize {
        self.jars.len()
    }
}

/// A shelf whose start-up hook always fails.
#[derive(Debug, Default)]
struct JammedShelf;

#[async_trait]
impl ActorResource for JammedShelf {
    type Action = ShelfAction;
    type ActionResult = ShelfActionResult;
    type Query = ShelfQuery;
    type QueryResult = Vec<String>;
    type Context = ();
    type Error = ShelfError;

    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Err(ShelfError::Jammed)
    }

    async fn handle_action(
        &mut self,
        _action: ShelfAction,
        _ctx: &Self::Context,
    ) -> Result<ShelfActionResult, Self::Error> {
        unreachable!("a jammed shelf never serves actions")
    }

    async fn handle_query(
        &self,
        _query: ShelfQuery,
        _ctx: &Self::Context,
    ) -> Result<Vec<String>, Self::Error> {
        unreachable!("a jammed shelf never serves queries")
    }
}

// --- Tests ---

#[tokio::test]
async fn test_runtime_full_lifecycle() {
    let (actor, client) = ResourceActor::new(JarShelf::default(), 10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Actions mutate in arrival order
    let put = client
        .perform_action(ShelfAction::Put("plum jam".into()))
        .await
        .unwrap();
    assert_eq!(put, ShelfActionResult::Put(1));
    client
        .perform_action(ShelfAction::Put("pickles".into()))
        .await
        .unwrap();

    // 2. Queries see the result
    let labels = client.query(ShelfQuery::Labels).await.unwrap();
    assert_eq!(labels, vec!["plum jam".to_string(), "pickles".to_string()]);

    // 3. Oldest first
    let taken = client.perform_action(ShelfAction::Take).await.unwrap();
    assert_eq!(taken, ShelfActionResult::Take("plum jam".into()));

    // 4. Resource errors come back typed
    client.perform_action(ShelfAction::Take).await.unwrap();
    let err = client.perform_action(ShelfAction::Take).await.unwrap_err();
    assert_eq!(err.downcast_resource::<ShelfError>().unwrap(), ShelfError::Empty);

    // 5. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_clients_are_serialized() {
    let (actor, client) = ResourceActor::new(JarShelf::default(), 4);
    let handle = tokio::spawn(actor.run(()));

    let mut tasks = vec![];
    for i in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .perform_action(ShelfAction::Put(format!("jar {}", i)))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let labels = client.query(ShelfQuery::Labels).await.unwrap();
    assert_eq!(labels.len(), 20);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_start_refuses_requests() {
    let (actor, client) = ResourceActor::new(JammedShelf, 4);
    let handle = tokio::spawn(actor.run(()));

    let result = client.query(ShelfQuery::Labels).await;
    match result {
        Err(FrameworkError::StartupFailed(reason)) => assert!(reason.contains("refused")),
        other => panic!("expected StartupFailed, got {:?}", other),
    }

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::new(JarShelf::default(), 4);
    // Never run: dropping the actor closes the mailbox.
    drop(actor);

    let result = client.query(ShelfQuery::Labels).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
