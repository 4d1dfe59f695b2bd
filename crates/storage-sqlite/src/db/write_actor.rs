//! Single-writer actor serializing all database writes.
//!
//! SQLite allows one writer at a time. Instead of letting pool
//! connections race for the write lock, every mutation is sent to one
//! background task owning a dedicated connection, and runs inside an
//! immediate transaction.

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{Connection, SqliteConnection};
use finfusion_core::errors::Result;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

use crate::errors::StorageError;

// Jobs are type-erased so a single channel can carry closures with
// different return types.
type ErasedResult = Result<Box<dyn Any + Send + 'static>>;
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> ErasedResult + Send + 'static>;

/// Handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, oneshot::Sender<ErasedResult>)>,
}

impl WriteHandle {
    /// Runs `job` on the writer's connection inside an immediate
    /// transaction and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + Any + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();
        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor channel closed");

        ret_rx
            .await
            .expect("writer actor dropped reply sender")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result type mismatch"))
            })
    }
}

/// Spawns the writer actor. The actor holds one pooled connection for
/// its lifetime and processes jobs in submission order.
pub fn spawn_writer(pool: Pool<ConnectionManager<SqliteConnection>>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, oneshot::Sender<ErasedResult>)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to acquire dedicated writer connection");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: ErasedResult = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // Receiver may have been dropped (cancelled request).
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
