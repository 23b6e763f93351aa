use crate::areas::workspace::Workspace;
use crate::artifacts::conflict::ConflictMarkers;
use crate::artifacts::conflict::resolver::ConflictResolver;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Drives resolution of plan entries against files under one root directory.
pub struct Resolver {
    workspace: Workspace,
    conflicts: ConflictResolver,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Resolver {
    pub fn new(root: &Path, markers: ConflictMarkers, writer: Box<dyn std::io::Write>) -> Self {
        Resolver {
            workspace: Workspace::new(root.into()),
            conflicts: ConflictResolver::new(markers),
            writer: RefCell::new(writer),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn conflicts(&self) -> &ConflictResolver {
        &self.conflicts
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
