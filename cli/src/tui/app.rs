use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::TableState;
use todolist_core::notify::{Notice, NoticeKind};
use todolist_core::{Confirmation, Filter, PendingDelete, TaskStore, TodoController};

use crate::tui::notifier::TuiNotifier;

pub enum InputMode {
    Normal,
    Adding,
}

pub enum Modal {
    Notice(Notice),
    ConfirmDelete(PendingDelete),
}

pub struct App<S: TaskStore> {
    pub controller: TodoController<S, TuiNotifier>,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub modal: Option<Modal>,
    pub should_quit: bool,
}

impl<S: TaskStore> App<S> {
    pub fn new(store: S) -> App<S> {
        let controller = TodoController::new(store, TuiNotifier::new());
        let mut state = TableState::default();
        if !controller.rows().is_empty() {
            state.select(Some(0));
        }
        App {
            controller,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            modal: None,
            should_quit: false,
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if self.modal.is_some() {
            self.on_modal_key(code);
            return;
        }

        match self.input_mode {
            InputMode::Normal => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Char(' ') => self.toggle_selected(),
                KeyCode::Char('d') | KeyCode::Delete => self.request_delete_selected(),
                KeyCode::Char('a') | KeyCode::Char('i') => self.enter_add_mode(),
                KeyCode::Char('1') => self.select_filter(Filter::All),
                KeyCode::Char('2') => self.select_filter(Filter::Active),
                KeyCode::Char('3') => self.select_filter(Filter::Completed),
                KeyCode::Tab | KeyCode::Char('f') => {
                    self.select_filter(self.controller.filter().next())
                }
                _ => {}
            },
            InputMode::Adding => match code {
                KeyCode::Enter => self.submit_command(),
                KeyCode::Esc => self.exit_input_mode(),
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                _ => {}
            },
        }
    }

    fn on_modal_key(&mut self, code: KeyCode) {
        match self.modal.take() {
            Some(Modal::ConfirmDelete(pending)) => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.answer_delete(pending, Confirmation::Confirmed)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.answer_delete(pending, Confirmation::Cancelled)
                }
                // Still waiting for an answer
                _ => self.modal = Some(Modal::ConfirmDelete(pending)),
            },
            Some(Modal::Notice(_)) => self.show_next_notice(),
            None => {}
        }
    }

    pub fn next(&mut self) {
        let len = self.controller.rows().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.controller.rows().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn selected_id(&self) -> Option<uuid::Uuid> {
        self.state
            .selected()
            .and_then(|i| self.controller.row_at(i))
            .map(|row| row.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let result = self.controller.toggle(id);
            self.after_change(result);
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Some(pending) = self.controller.request_delete(id) {
                self.modal = Some(Modal::ConfirmDelete(pending));
            } else {
                self.clamp_selection();
            }
        }
    }

    pub fn answer_delete(&mut self, pending: PendingDelete, answer: Confirmation) {
        let result = self.controller.resolve_delete(pending, answer);
        self.after_change(result);
    }

    pub fn select_filter(&mut self, filter: Filter) {
        self.controller.select_filter(filter);
        self.state.select(if self.controller.rows().is_empty() { None } else { Some(0) });
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        let result = self.controller.submit(&self.input);
        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
        self.after_change(result);
    }

    fn after_change<T>(&mut self, result: Result<T>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "could not save task list");
            self.modal = Some(Modal::Notice(Notice {
                kind: NoticeKind::Info,
                title: "Error".to_string(),
                message: format!("{:#}", e),
            }));
        }
        self.clamp_selection();
        if self.modal.is_none() {
            self.show_next_notice();
        }
    }

    fn show_next_notice(&mut self) {
        self.modal = self
            .controller
            .notifier_mut()
            .next_notice()
            .map(Modal::Notice);
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.rows().len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }
}
