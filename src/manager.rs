// SPDX-License-Identifier: MIT OR Apache-2.0

//! The manager tree.
//!
//! A [`Manager`] is a node in a tree.  Each node owns a set of [`Backend`]s, a tag, some
//! global data and its child managers.  Logging on a node composes the message once and
//! delivers it to the backends of every node from the root down to the logging node, in
//! that order.
//!
//! # Ownership
//!
//! Parents hold their children strongly.  Children only hold a weak reference to their
//! parent, used to build the full tag and merged global data and to detach themselves on
//! close.  A child stays alive for as long as it is reachable from its parent, even if the
//! caller drops every handle to it.
//!
//! # Locking
//!
//! Each node has its own read/write lock guarding its tag, backends, children and global
//! data.  A node never holds its lock while taking another node's lock: state is copied out
//! of the guard and the guard is dropped before walking to the parent or calling into a
//! backend.

use crate::backend::Backend;
use crate::compose;
use crate::context::{self, ContextData, ContextValue};
use crate::error::{Error, ManagerResult};
use crate::level::Level;
use crate::spinlock::Spinlock;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

#[derive(Debug, Default)]
struct NodeState {
    tag: String,
    backends: HashMap<String, Arc<dyn Backend>>,
    children: HashMap<String, Manager>,
    global_data: ContextData,
}

#[derive(Debug)]
struct ManagerInner {
    id: String,
    parent: Option<Weak<ManagerInner>>,
    state: Spinlock<NodeState>,
}

/// A node of the logger tree.
///
/// `Manager` is a handle: cloning it is cheap and every clone refers to the same node.
/// Two handles compare equal when they refer to the same node.
///
/// # Example
///
/// ```
/// use logtree::{InMemoryLogger, Manager};
/// use std::sync::Arc;
///
/// let root = Manager::with_tag("[root]");
/// let root_logs = Arc::new(InMemoryLogger::new());
/// root.add(root_logs.clone()).unwrap();
///
/// let child = root.new_sub_manager("[child]");
/// let child_logs = Arc::new(InMemoryLogger::with_id("child"));
/// child.add(child_logs.clone()).unwrap();
///
/// logtree::info!(child, "x", "y");
/// assert_eq!(root_logs.logs(), vec!["[INFO][root][child] x y\n"]);
/// assert_eq!(child_logs.logs(), vec!["[INFO][root][child] x y\n"]);
///
/// logtree::log!(root, "z");
/// assert_eq!(root_logs.logs()[1], "[root] z\n");
/// assert_eq!(child_logs.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Manager {
    inner: Arc<ManagerInner>,
}

impl PartialEq for Manager {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Manager {}

impl Hash for Manager {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a root manager with an empty tag.
    pub fn new() -> Self {
        Self::with_tag("")
    }

    /// Creates a root manager with the given tag.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self::create(tag.into(), None)
    }

    fn create(tag: String, parent: Option<Weak<ManagerInner>>) -> Self {
        Manager {
            inner: Arc::new(ManagerInner {
                id: uuid::Uuid::new_v4().to_string(),
                parent,
                state: Spinlock::new(NodeState {
                    tag,
                    ..NodeState::default()
                }),
            }),
        }
    }

    /// The manager's unique id.  Never changes.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// The manager this one was created from, if it is still alive.
    pub fn parent(&self) -> Option<Manager> {
        self.inner
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Manager { inner })
    }

    /// Creates a child manager.
    ///
    /// Messages logged on the child are also delivered to this manager's backends, and
    /// the child's full tag starts with this manager's full tag.
    ///
    /// The child only holds a weak reference to this manager, so the caller must keep this
    /// manager (or a clone of the handle) alive.  Once the last handle is dropped, the child
    /// no longer inherits this manager's tag or global data and its messages stop reaching
    /// this manager's backends.
    pub fn new_sub_manager(&self, tag: impl Into<String>) -> Manager {
        let child = Self::create(tag.into(), Some(Arc::downgrade(&self.inner)));
        self.inner
            .state
            .write()
            .children
            .insert(child.id().to_string(), child.clone());
        child
    }

    fn remove_child(&self, id: &str) {
        self.inner.state.write().children.remove(id);
    }

    pub fn set_tag(&self, tag: impl Into<String>) {
        self.inner.state.write().tag = tag.into();
    }

    pub fn tag(&self) -> String {
        self.inner.state.read().tag.clone()
    }

    /// The tags of every ancestor, root first, followed by this manager's tag.
    ///
    /// No separator is inserted; tags are expected to carry their own delimiters.
    pub fn full_tag(&self) -> String {
        let tag = self.tag();
        match self.parent() {
            Some(parent) => parent.full_tag() + &tag,
            None => tag,
        }
    }

    /// Adds data that is appended to every message logged on this manager or its
    /// descendants.  Replaces any previous value stored under `key` on this manager.
    pub fn add_global_data(&self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.inner
            .state
            .write()
            .global_data
            .insert(key.into(), value.into());
    }

    /// Like [`Self::add_global_data`], for any serializable value.
    ///
    /// The value is converted to JSON now, so a value that cannot be encoded is rejected
    /// here with [`Error::Encoding`] instead of breaking a later log call.
    pub fn try_add_global_data<T: Serialize + ?Sized>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> ManagerResult<()> {
        let key = key.into();
        match serde_json::to_value(value) {
            Ok(value) => {
                self.add_global_data(key, value);
                Ok(())
            }
            Err(source) => Err(Error::Encoding { key, source }),
        }
    }

    pub fn remove_global_data(&self, key: &str) {
        self.inner.state.write().global_data.remove(key);
    }

    /// The global data set on this manager, without inherited entries.
    pub fn global_data(&self) -> ContextData {
        self.inner.state.read().global_data.clone()
    }

    /// The global data attached to messages logged on this manager: everything inherited
    /// from the ancestors, overlaid with this manager's own entries.
    pub fn all_global_data(&self) -> ContextData {
        let mut data = match self.parent() {
            Some(parent) => parent.all_global_data(),
            None => ContextData::new(),
        };
        context::overlay(&mut data, &self.inner.state.read().global_data);
        data
    }

    /// Attaches a backend.
    ///
    /// Returns [`Error::AlreadyExists`] if a backend with the same id is already attached
    /// to this manager; the attached one is left in place.
    pub fn add(&self, backend: Arc<dyn Backend>) -> ManagerResult<()> {
        let mut state = self.inner.state.write();
        if state.backends.contains_key(backend.id()) {
            return Err(Error::AlreadyExists(backend.id().to_string()));
        }
        state.backends.insert(backend.id().to_string(), backend);
        Ok(())
    }

    /// Detaches and closes a backend.
    ///
    /// Removing an id that is not attached does nothing.  If the backend fails to close it
    /// is still detached, and the failure is returned as [`Error::BackendClose`].
    pub fn remove(&self, backend_id: &str) -> ManagerResult<()> {
        let removed = self.inner.state.write().backends.remove(backend_id);
        match removed {
            Some(backend) => backend
                .close()
                .map_err(|source| Error::backend_close(backend, source)),
            None => Ok(()),
        }
    }

    /// Detaches this manager from its parent, then closes all of its backends and
    /// recursively every child manager.
    ///
    /// The walk always runs to completion.  Every backend that failed to close is reported
    /// in the returned list, which is empty on success.
    pub fn close(&self) -> Vec<Error> {
        self.close_from_parent(false)
    }

    fn close_from_parent(&self, from_parent: bool) -> Vec<Error> {
        let (backends, children) = {
            let mut state = self.inner.state.write();
            (
                std::mem::take(&mut state.backends),
                std::mem::take(&mut state.children),
            )
        };

        // if the parent is closing us, it already dropped us from its children
        if !from_parent {
            if let Some(parent) = self.parent() {
                parent.remove_child(self.id());
            }
        }

        let mut errs = Vec::new();
        for backend in backends.into_values() {
            if let Err(source) = backend.close() {
                errs.push(Error::backend_close(backend, source));
            }
        }
        for child in children.into_values() {
            errs.extend(child.close_from_parent(true));
        }
        errs
    }

    /// Ids of the backends attached directly to this manager.
    pub fn backend_ids(&self) -> Vec<String> {
        self.inner.state.read().backends.keys().cloned().collect()
    }

    pub fn backend_count(&self) -> usize {
        self.inner.state.read().backends.len()
    }

    pub fn child_count(&self) -> usize {
        self.inner.state.read().children.len()
    }

    fn format(&self, text: &str) -> String {
        compose::compose(&self.full_tag(), text, &self.all_global_data())
    }

    /// Delivers an already composed message to the ancestors' backends, root first, then
    /// to this manager's backends.
    fn dispatch(&self, level: Level, msg: &str) {
        if let Some(parent) = self.parent() {
            parent.dispatch(level, msg);
        }
        let backends: Vec<Arc<dyn Backend>> =
            self.inner.state.read().backends.values().cloned().collect();
        for backend in backends {
            backend.write(level, msg);
        }
    }

    fn emit(&self, level: Level, args: &[&dyn Display]) {
        let msg = self.format(&compose::join_args(args));
        self.dispatch(level, &msg);
    }

    /**
    Logs an error message.

    Operands are printed separated by single spaces and followed by a newline.  See also
    the [`error!`](crate::error!) macro.
    */
    pub fn error(&self, args: &[&dyn Display]) {
        self.emit(Level::Error, args)
    }

    /// Logs a preformatted error message.  See also [`errorf!`](crate::errorf!).
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.error(&[&args])
    }

    /// Logs a message that may be helpful, but isn't essential, for troubleshooting.
    pub fn info(&self, args: &[&dyn Display]) {
        self.emit(Level::Info, args)
    }

    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.info(&[&args])
    }

    /// Logs a message intended for a developer actively debugging the subsystem.
    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit(Level::Debug, args)
    }

    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug(&[&args])
    }

    /// Logs a message without a severity prefix.
    pub fn log(&self, args: &[&dyn Display]) {
        self.emit(Level::Plain, args)
    }

    pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(&[&args])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryLogger;
    use crate::error::BoxError;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Records every write, tagged with its own id, into a journal shared between
    /// backends so the delivery order across backends can be checked.
    #[derive(Debug)]
    struct JournalBackend {
        id: String,
        journal: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl JournalBackend {
        fn new(id: &str, journal: &Arc<Mutex<Vec<(String, String)>>>) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                journal: journal.clone(),
            })
        }
        fn record(&self, msg: &str) {
            self.journal
                .lock()
                .unwrap()
                .push((self.id.clone(), msg.to_string()));
        }
    }

    impl Backend for JournalBackend {
        fn id(&self) -> &str {
            &self.id
        }
        fn close(&self) -> Result<(), BoxError> {
            Ok(())
        }
        fn is_closed(&self) -> bool {
            false
        }
        fn error(&self, msg: &str) {
            self.record(msg)
        }
        fn info(&self, msg: &str) {
            self.record(msg)
        }
        fn debug(&self, msg: &str) {
            self.record(msg)
        }
        fn log(&self, msg: &str) {
            self.record(msg)
        }
    }

    #[derive(Debug)]
    struct FailingBackend {
        id: String,
        closed: AtomicBool,
    }

    impl FailingBackend {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                closed: AtomicBool::new(false),
            })
        }
    }

    impl Backend for FailingBackend {
        fn id(&self) -> &str {
            &self.id
        }
        fn close(&self) -> Result<(), BoxError> {
            self.closed.store(true, Ordering::SeqCst);
            Err(format!("{} refused to close", self.id).into())
        }
        fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }
        fn error(&self, _msg: &str) {}
        fn info(&self, _msg: &str) {}
        fn debug(&self, _msg: &str) {}
        fn log(&self, _msg: &str) {}
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let m = Manager::new();
        let id = m.id().to_string();
        assert!(!id.is_empty());
        assert_eq!(m.id(), id);
        assert_ne!(Manager::new().id(), id);
        assert_ne!(m.new_sub_manager("").id(), id);
    }

    #[test]
    fn handles_compare_by_node() {
        let m = Manager::new();
        assert_eq!(m, m.clone());
        assert_ne!(m, Manager::new());
    }

    #[test]
    fn tags() {
        let m = Manager::with_tag("tag");
        assert_eq!(m.tag(), "tag");
        assert_eq!(m.full_tag(), "tag");

        m.set_tag("new-tag");
        assert_eq!(m.tag(), "new-tag");
        assert!(Manager::new().tag().is_empty());
    }

    #[test]
    fn full_tag_concatenates_ancestors() {
        let m = Manager::with_tag("grand-parent");
        let sm = m.new_sub_manager("parent");
        let ssm = sm.new_sub_manager("child");

        assert_eq!(ssm.full_tag(), "grand-parentparentchild");
        assert_eq!(sm.full_tag(), "grand-parentparent");
        assert_eq!(m.full_tag(), "grand-parent");

        m.set_tag("[gp]");
        assert_eq!(ssm.full_tag(), "[gp]parentchild");
    }

    #[test]
    fn global_data() {
        let m = Manager::new();
        m.add_global_data("key", "value");
        assert_eq!(m.inner.state.read().global_data.len(), 1);

        m.remove_global_data("key");
        assert!(m.inner.state.read().global_data.is_empty());

        // removing a missing key is fine
        m.remove_global_data("key");
    }

    #[test]
    fn global_data_is_merged_down_the_tree() {
        let m = Manager::new();
        m.add_global_data("region", "eu");
        m.add_global_data("shard", 1);
        let sm = m.new_sub_manager("");
        sm.add_global_data("shard", 7);

        let merged = sm.all_global_data();
        assert_eq!(merged["region"], json!("eu"));
        assert_eq!(merged["shard"], json!(7));
        assert_eq!(m.all_global_data()["shard"], json!(1));
        assert_eq!(sm.global_data().len(), 1);

        // never cached
        m.add_global_data("late", true);
        assert_eq!(sm.all_global_data()["late"], json!(true));
    }

    #[test]
    fn try_add_global_data_rejects_non_json_values() {
        let m = Manager::new();
        m.try_add_global_data("list", &vec![1, 2, 3]).unwrap();
        assert_eq!(m.global_data()["list"], json!([1, 2, 3]));

        let mut bad = HashMap::new();
        bad.insert((1, 2), "tuple keys are not JSON");
        let err = m.try_add_global_data("bad", &bad).unwrap_err();
        assert!(matches!(err, Error::Encoding { ref key, .. } if key == "bad"));
        assert!(!m.global_data().contains_key("bad"));
    }

    #[test]
    fn sub_manager_registration() {
        let m = Manager::new();
        let sm = m.new_sub_manager("child");
        assert_eq!(m.child_count(), 1);
        assert_eq!(sm.parent(), Some(m.clone()));
        assert!(m.parent().is_none());

        assert!(sm.close().is_empty());
        assert_eq!(m.child_count(), 0);
    }

    #[test]
    fn dropping_the_parent_cuts_inheritance() {
        let root = Manager::with_tag("[root]");
        root.add_global_data("app", "demo");
        let root_logs = Arc::new(InMemoryLogger::new());
        root.add(root_logs.clone()).unwrap();

        let child = root.new_sub_manager("[c]");
        let child_logs = Arc::new(InMemoryLogger::with_id("child"));
        child.add(child_logs.clone()).unwrap();
        assert_eq!(child.full_tag(), "[root][c]");

        drop(root);
        assert!(child.parent().is_none());
        assert_eq!(child.full_tag(), "[c]");
        assert!(child.all_global_data().is_empty());

        child.log(&[&"orphan"]);
        assert_eq!(child_logs.logs(), vec!["[c] orphan\n"]);
        assert!(root_logs.is_empty());

        // the temporary root is gone once the statement ends
        let detached = Manager::with_tag("[root]").new_sub_manager("[c]");
        assert_eq!(detached.full_tag(), "[c]");
    }

    #[test]
    fn children_outlive_their_handles() {
        let m = Manager::with_tag("[p]");
        let logs = Arc::new(InMemoryLogger::new());
        m.add(logs.clone()).unwrap();

        let id = {
            let sm = m.new_sub_manager("[c]");
            sm.id().to_string()
        };
        assert_eq!(m.child_count(), 1);
        let sm = m.inner.state.read().children[&id].clone();
        sm.log(&[&"still here"]);
        assert_eq!(logs.logs(), vec!["[p][c] still here\n"]);
    }

    #[test]
    fn add_backends() {
        let m = Manager::new();
        m.add(Arc::new(InMemoryLogger::new())).unwrap();
        m.add(Arc::new(InMemoryLogger::with_id("fake-id"))).unwrap();
        assert_eq!(m.backend_count(), 2);
        let mut ids = m.backend_ids();
        ids.sort();
        assert_eq!(ids, vec!["fake-id", "slice-logger"]);
    }

    #[test]
    fn add_duplicate_backend() {
        let m = Manager::new();
        let first = Arc::new(InMemoryLogger::new());
        m.add(first.clone()).unwrap();

        let err = m.add(Arc::new(InMemoryLogger::new())).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(ref id) if id == "slice-logger"));

        // the first one is still attached and working
        assert_eq!(m.backend_count(), 1);
        m.info(&[&"a"]);
        assert_eq!(first.logs(), vec!["[INFO]a\n"]);
    }

    #[test]
    fn same_id_on_different_managers() {
        let m = Manager::new();
        let sm = m.new_sub_manager("");
        m.add(Arc::new(InMemoryLogger::new())).unwrap();
        sm.add(Arc::new(InMemoryLogger::new())).unwrap();
    }

    #[test]
    fn remove_backend() {
        let m = Manager::new();
        let l = Arc::new(InMemoryLogger::new());
        m.add(l.clone()).unwrap();
        m.add(Arc::new(InMemoryLogger::with_id("fake-id"))).unwrap();

        m.remove(l.id()).unwrap();
        assert_eq!(m.backend_ids(), vec!["fake-id"]);
        assert!(l.is_closed());
    }

    #[test]
    fn remove_missing_backend() {
        let m = Manager::new();
        m.add(Arc::new(InMemoryLogger::new())).unwrap();
        m.remove("nope").unwrap();
        assert_eq!(m.backend_count(), 1);
    }

    #[test]
    fn remove_failing_backend_is_forced() {
        let m = Manager::new();
        let failing = FailingBackend::new("flaky");
        m.add(failing.clone()).unwrap();

        let err = m.remove("flaky").unwrap_err();
        match &err {
            Error::BackendClose { id, backend, .. } => {
                assert_eq!(id, "flaky");
                assert!(backend.is_closed());
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(m.backend_count(), 0);
        // not retried
        m.remove("flaky").unwrap();
    }

    #[test]
    fn close_backends() {
        let m = Manager::new();
        let l = Arc::new(InMemoryLogger::new());
        let l2 = Arc::new(InMemoryLogger::with_id("fake-id"));
        m.add(l.clone()).unwrap();
        m.add(l2.clone()).unwrap();

        assert!(m.close().is_empty());
        assert_eq!(m.backend_count(), 0);
        assert!(l.is_closed());
        assert!(l2.is_closed());
    }

    #[test]
    fn close_is_recursive() {
        let root = Manager::new();
        let mid = root.new_sub_manager("mid");
        let leaf = mid.new_sub_manager("leaf");
        let sibling = root.new_sub_manager("sibling");

        let mid_logs = Arc::new(InMemoryLogger::new());
        let leaf_logs = Arc::new(InMemoryLogger::new());
        mid.add(mid_logs.clone()).unwrap();
        leaf.add(leaf_logs.clone()).unwrap();

        assert!(mid.close().is_empty());

        assert_eq!(root.child_count(), 1);
        assert_eq!(mid.backend_count(), 0);
        assert_eq!(mid.child_count(), 0);
        assert_eq!(leaf.backend_count(), 0);
        assert_eq!(leaf.child_count(), 0);
        assert!(mid_logs.is_closed());
        assert!(leaf_logs.is_closed());
        assert_eq!(sibling.parent(), Some(root.clone()));
    }

    #[test]
    fn close_collects_every_failure() {
        let root = Manager::new();
        let sm = root.new_sub_manager("");
        let healthy = Arc::new(InMemoryLogger::new());
        root.add(FailingBackend::new("a")).unwrap();
        root.add(healthy.clone()).unwrap();
        sm.add(FailingBackend::new("b")).unwrap();

        let errs = root.close();
        let mut ids: Vec<String> = errs
            .iter()
            .map(|e| e.backend().unwrap().id().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(healthy.is_closed());
        assert_eq!(root.backend_count(), 0);
        assert_eq!(sm.backend_count(), 0);
    }

    #[test]
    fn levels() {
        let m = Manager::new();
        let l = Arc::new(InMemoryLogger::new());
        m.add(l.clone()).unwrap();

        m.error(&[&"a", &"b"]);
        m.error_fmt(format_args!("{} {}", "a", "b"));
        m.info(&[&"a", &"b"]);
        m.info_fmt(format_args!("{} {}", "a", "b"));
        m.debug(&[&"a", &"b"]);
        m.debug_fmt(format_args!("{} {}", "a", "b"));
        m.log(&[&"a", &"b"]);
        m.log_fmt(format_args!("{} {}", "a", "b"));

        assert_eq!(
            l.logs(),
            vec![
                "[ERROR]a b\n",
                "[ERROR]a b\n",
                "[INFO]a b\n",
                "[INFO]a b\n",
                "[DEBUG]a b\n",
                "[DEBUG]a b\n",
                "a b\n",
                "a b\n",
            ]
        );
    }

    #[test]
    fn levels_with_parents() {
        let m = Manager::new();
        let l1 = Arc::new(InMemoryLogger::new());
        m.add(l1.clone()).unwrap();

        let sm = m.new_sub_manager("[child]");
        let l2 = Arc::new(InMemoryLogger::with_id("fake-id"));
        sm.add(l2.clone()).unwrap();

        sm.info(&[&"a", &"b"]);
        sm.error(&[&"a", &"b"]);
        sm.debug(&[&"a", &"b"]);

        let expected = vec![
            "[INFO][child] a b\n",
            "[ERROR][child] a b\n",
            "[DEBUG][child] a b\n",
        ];
        assert_eq!(l1.logs(), expected);
        assert_eq!(l2.logs(), expected);
    }

    #[test]
    fn parents_are_served_first() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let root = Manager::with_tag("[r]");
        let mid = root.new_sub_manager("[m]");
        let leaf = mid.new_sub_manager("[l]");
        leaf.add(JournalBackend::new("leaf", &journal)).unwrap();
        root.add(JournalBackend::new("root", &journal)).unwrap();
        mid.add(JournalBackend::new("mid", &journal)).unwrap();

        leaf.log(&[&"hi"]);

        let journal = journal.lock().unwrap();
        let order: Vec<&str> = journal.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["root", "mid", "leaf"]);
        assert!(journal.iter().all(|(_, msg)| msg == "[r][m][l] hi\n"));
    }

    #[test]
    fn global_data_line() {
        let m = Manager::new();
        let l = Arc::new(InMemoryLogger::new());
        m.add(l.clone()).unwrap();
        m.add_global_data("key", "value");

        m.log(&[&"x"]);
        assert_eq!(l.logs(), vec!["x\n{\"key\":\"value\"}\n"]);
    }

    #[test]
    fn ancestors_get_the_leaf_composition() {
        let m = Manager::with_tag("[parent]");
        m.add_global_data("app", "demo");
        let l1 = Arc::new(InMemoryLogger::new());
        m.add(l1.clone()).unwrap();

        let sm = m.new_sub_manager("[child]");
        sm.add_global_data("app", "child");

        sm.log(&[&"a"]);
        let logs = l1.logs();
        let mut lines = logs[0].lines();
        assert_eq!(lines.next(), Some("[parent][child] a"));
        let data: ContextData = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(data["app"], json!("child"));
        assert_eq!(lines.next(), None);
    }
}
