//! Recording fakes for the fetch and spawn seams.

use crate::domain::models::DelegateReport;
use crate::remote::Fetch;
use crate::services::runner::{Invocation, Spawn};
use std::cell::RefCell;

pub struct FakeFetcher {
    body: Option<Vec<u8>>,
    sources: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new(body: &[u8]) -> Self {
        Self {
            body: Some(body.to_vec()),
            sources: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            sources: RefCell::new(Vec::new()),
        }
    }

    pub fn sources(&self) -> Vec<String> {
        self.sources.borrow().clone()
    }
}

impl Fetch for FakeFetcher {
    fn fetch(&self, source: &str) -> anyhow::Result<Vec<u8>> {
        self.sources.borrow_mut().push(source.to_string());
        match &self.body {
            Some(b) => Ok(b.clone()),
            None => anyhow::bail!("{} unreachable", source),
        }
    }
}

pub struct FakeSpawner {
    exit_code: i32,
    invocations: RefCell<Vec<Invocation>>,
}

impl FakeSpawner {
    pub fn exiting(exit_code: i32) -> Self {
        Self {
            exit_code,
            invocations: RefCell::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }
}

impl Spawn for FakeSpawner {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<DelegateReport> {
        self.invocations.borrow_mut().push(invocation.clone());
        Ok(DelegateReport {
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            exit_code: Some(self.exit_code),
            success: self.exit_code == 0,
        })
    }
}
