//! # Concurrency Integration Tests
//!
//! Registration and unregistration racing dispatch from other threads.
//! The guarantees under test:
//!
//! - A handler registered for the whole run receives every command exactly
//!   once.
//! - Churning a second handler's registration concurrently never corrupts
//!   the registry or panics a dispatcher.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use std::thread;

    use zw_router::{CmdHandler, CommandRouter, DynCmdHandler};
    use zw_types::{command_class, HandlerError, HomeId, NodeId, ZwCommand, ZwEnvelope};

    const HOME: HomeId = HomeId(0xFADE_D0FF);

    /// Counts invocations without recording payloads.
    struct TallyHandler {
        hits: AtomicU64,
    }

    impl TallyHandler {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                hits: AtomicU64::new(0),
            })
        }
    }

    impl CmdHandler for TallyHandler {
        fn name(&self) -> &'static str {
            "tally"
        }

        fn process_cmd(&self, _node_id: NodeId, _cmd: &ZwCommand) -> Result<(), HandlerError> {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    fn switch_report(node: u8) -> ZwEnvelope {
        ZwEnvelope::command(
            HOME,
            NodeId(node),
            ZwCommand::new(command_class::SWITCH_BINARY, 0x03, vec![0xFF]),
        )
    }

    /// A handler registered before dispatch starts and never removed gets
    /// exactly one invocation per routed command, no matter how much the
    /// registry churns around it.
    #[test]
    fn test_stable_handler_gets_exactly_once_delivery_under_churn() {
        const COMMANDS: u64 = 2_000;
        const CHURN_ROUNDS: usize = 500;

        let router = Arc::new(CommandRouter::new());
        let stable = TallyHandler::new();
        router.register_handler(stable.clone());

        let churn_router = router.clone();
        let churner = thread::spawn(move || {
            for _ in 0..CHURN_ROUNDS {
                let transient: DynCmdHandler = TallyHandler::new();
                churn_router.register_handler(transient.clone());
                churn_router.unregister_handler(&transient);
            }
        });

        let dispatch_router = router.clone();
        let dispatcher = thread::spawn(move || {
            for i in 0..COMMANDS {
                dispatch_router.route(&switch_report((i % 200) as u8 + 1));
            }
        });

        churner.join().expect("churn thread panicked");
        dispatcher.join().expect("dispatch thread panicked");

        assert_eq!(stable.hits.load(Ordering::Relaxed), COMMANDS);
        assert_eq!(router.commands_routed(), COMMANDS);
        // All transient handlers were unregistered; only the stable one remains.
        assert_eq!(router.handler_count(), 1);
    }

    /// Multiple threads routing through one router deliver every command to
    /// the shared handler.
    #[test]
    fn test_parallel_dispatchers_share_one_registry() {
        const THREADS: u64 = 4;
        const PER_THREAD: u64 = 500;

        let router = Arc::new(CommandRouter::new());
        let handler = TallyHandler::new();
        router.register_handler(handler.clone());

        let dispatchers: Vec<_> = (0..THREADS)
            .map(|t| {
                let router = router.clone();
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        router.route(&switch_report(((t * PER_THREAD + i) % 200) as u8 + 1));
                    }
                })
            })
            .collect();

        for dispatcher in dispatchers {
            dispatcher.join().expect("dispatcher panicked");
        }

        assert_eq!(handler.hits.load(Ordering::Relaxed), THREADS * PER_THREAD);
        assert_eq!(router.commands_routed(), THREADS * PER_THREAD);
    }

    /// Unregistering from inside a dispatch (handler removing itself) must
    /// not deadlock, because dispatch runs on a snapshot outside the lock.
    #[test]
    fn test_handler_can_unregister_itself_during_dispatch() {
        struct SelfRemovingHandler {
            router: Arc<CommandRouter>,
            this: parking_lot::Mutex<Option<DynCmdHandler>>,
            hits: AtomicU64,
        }

        impl CmdHandler for SelfRemovingHandler {
            fn name(&self) -> &'static str {
                "self-removing"
            }

            fn process_cmd(&self, _node_id: NodeId, _cmd: &ZwCommand) -> Result<(), HandlerError> {
                self.hits.fetch_add(1, Ordering::Relaxed);
                if let Some(this) = self.this.lock().take() {
                    self.router.unregister_handler(&this);
                }
                Ok(())
            }
        }

        let router = Arc::new(CommandRouter::new());
        let handler = Arc::new(SelfRemovingHandler {
            router: router.clone(),
            this: parking_lot::Mutex::new(None),
            hits: AtomicU64::new(0),
        });
        let dyn_handler: DynCmdHandler = handler.clone();
        *handler.this.lock() = Some(dyn_handler);
        router.register_handler(handler.clone());

        router.route(&switch_report(42));
        router.route(&switch_report(42));

        // First dispatch delivered and removed the handler; second saw an
        // empty registry.
        assert_eq!(handler.hits.load(Ordering::Relaxed), 1);
        assert_eq!(router.handler_count(), 0);
    }
}
