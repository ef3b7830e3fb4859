//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logtree

logtree is a hierarchical logging facade for Rust.

# Development status

logtree is experimental and the API may change.

# The problem

A program is rarely one thing.  A server has a database layer, a cache, a request handler per
connection.  Each of those wants its messages labeled, wants some of them to land in their own
place (a per-connection buffer, a file for the database layer), and still wants everything to
show up wherever the program as a whole logs.

Passing a logger around doesn't get you there: the database layer's logger doesn't know it is part
of the server, and the server's logger doesn't see what the database layer writes.

# The tree

logtree organizes logging as a tree of [Manager]s.

* Every manager has a *tag*.  A manager's *full tag* is its ancestors' tags, root first, followed
  by its own, with no separator: tags carry their own delimiters, e.g. `"[server]"`, `"[db]"`.
* Every manager holds a set of [Backend]s, the places messages actually go.
* A message logged on a manager is composed once and delivered to the backends of every manager
  from the root down to the one it was logged on, root first.  Ancestors see everything their
  descendants log; descendants don't see what their ancestors log.
* Every manager holds *global data*, key/value pairs appended to each message as a line of JSON.
  A manager's entries shadow entries of the same key set on its ancestors.

```rust
use logtree::{InMemoryLogger, Manager};
use std::sync::Arc;

let server = Manager::with_tag("[server]");
let everything = Arc::new(InMemoryLogger::new());
server.add(everything.clone()).unwrap();

let db = server.new_sub_manager("[db]");
let db_only = Arc::new(InMemoryLogger::with_id("db"));
db.add(db_only.clone()).unwrap();

logtree::error!(db, "connection lost after", 3, "retries");
assert_eq!(everything.logs(), vec!["[ERROR][server][db] connection lost after 3 retries\n"]);
assert_eq!(db_only.logs(), everything.logs());

db.add_global_data("pool", "primary");
logtree::info!(db, "reconnected");
assert_eq!(db_only.logs()[1], "[INFO][server][db] reconnected\n{\"pool\":\"primary\"}\n");
```

# Levels

There are four: error, info, debug and plain.  The level is cosmetic.  Every backend receives every
message; the level only selects which backend method is called, and the reference backends use it
to pick a prefix (`[ERROR]`, `[INFO]`, `[DEBUG]`, none).

# Backends

Anything implementing [Backend] can be attached.  Two reference backends ship with the crate:

* [StdErrorLogger] writes to stderr (the browser console on wasm32).
* [InMemoryLogger] accumulates messages in memory, for tests.

# The default manager

For programs that don't want to manage a tree, the [global] module forwards to one process-wide
root manager.

# Multithreading

[Manager] handles are `Send + Sync` and cheap to clone.  Each manager has its own lock; no lock is
ever held across managers or while calling into a backend.
*/

mod backend;
mod compose;
pub mod context;
mod error;
pub mod global;
mod inmemory_logger;
mod level;
mod macros;
mod manager;
mod spinlock;
mod stderror_logger;

pub use backend::Backend;
pub use context::{ContextData, ContextValue};
pub use error::{BoxError, Error, ManagerResult};
pub use inmemory_logger::InMemoryLogger;
pub use level::Level;
pub use manager::Manager;
pub use stderror_logger::StdErrorLogger;
