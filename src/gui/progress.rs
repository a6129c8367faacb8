// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    notices: Arc<Mutex<Vec<String>>>,
    done: usize,
    cached: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, notices: Arc<Mutex<Vec<String>>>) -> Self {
        Self { status, notices, done: 0, cached: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *lock!(self.status) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _index: usize, label: &str, cached: bool) {
        self.done += 1;
        if cached { self.cached += 1; }
        self.set_status(format!("Fetched {}/{}: {}", self.done, self.total, label));
    }
    fn notify_error(&mut self, msg: &str) {
        lock!(self.notices).push(s!(msg));
    }
    fn finish(&mut self) {
        if self.cached > 0 {
            self.set_status(format!(
                "Fetch complete ({}/{}, {} from cache)",
                self.done, self.total, self.cached
            ));
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
