use super::*;
use crate::kernel::buffers::new_file_template;
use crate::kernel::chat::{ChatRole, CANNED_REPLY};
use crate::kernel::demo::{demo_project, FIRST_USER_NODE_ID};
use crate::kernel::services::ports::IdeConfig;
use crate::kernel::state::{ExplorerContextMenuItem, InputDialogKind, PendingAction};
use rustc_hash::FxHashSet;
use std::time::Duration;

fn new_store() -> Store {
    let (tree, buffers) = demo_project();
    Store::new(AppState::new(tree, buffers, IdeConfig::default()))
}

fn id(raw: u64) -> NodeId {
    NodeId::new(raw)
}

fn type_into_dialog(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::InputDialogAppend(ch));
    }
}

#[test]
fn initial_state_has_welcome_tab_active() {
    let store = new_store();
    assert_eq!(store.state().tabs.tabs(), &[TabKey::Welcome]);
    assert_eq!(store.state().tabs.active(), Some(TabKey::Welcome));
    assert!(store.state().explorer.selected().is_none());
}

#[test]
fn create_file_under_folder_expands_and_opens_it() {
    let mut store = new_store();
    store.state.tree.set_expanded(id(5), false);

    let vault = store.create_node(NodeKind::File, "vault.rs", Some(id(5))).unwrap();

    let tree = &store.state().tree;
    let node = tree.find(vault).unwrap();
    assert_eq!(node.extension(), Some("rs"));
    assert_eq!(node.parent(), Some(id(5)));
    assert_eq!(tree.find(id(5)).unwrap().children().last(), Some(&vault));
    assert!(tree.is_expanded(id(5)));

    assert_eq!(store.state().tabs.active(), Some(TabKey::File(vault)));
    assert_eq!(store.state().explorer.selected(), Some(vault));
    assert_eq!(
        store.state().buffers.text(vault).as_deref(),
        Some(new_file_template("rs").as_str())
    );
}

#[test]
fn create_first_user_node_gets_reserved_id() {
    let mut store = new_store();
    let created = store.create_node(NodeKind::Folder, "migrations", None).unwrap();
    assert_eq!(created, id(FIRST_USER_NODE_ID));
    assert_eq!(store.state().tree.roots().last(), Some(&created));
    // Folders are not opened.
    assert_eq!(store.state().tabs.active(), Some(TabKey::Welcome));
}

#[test]
fn create_under_file_or_missing_parent_fails() {
    let mut store = new_store();
    let before = store.state().tree.len();

    assert_eq!(
        store.create_node(NodeKind::File, "x.rs", Some(id(6))),
        Err(ProjectTreeError::ParentNotFound(id(6)))
    );
    assert_eq!(
        store.create_node(NodeKind::File, "x.rs", Some(id(999))),
        Err(ProjectTreeError::ParentNotFound(id(999)))
    );
    assert_eq!(
        store.create_node(NodeKind::File, "   ", None),
        Err(ProjectTreeError::EmptyName)
    );
    assert_eq!(store.state().tree.len(), before);
}

#[test]
fn ids_stay_unique_across_create_delete_sequences() {
    let mut store = new_store();
    let mut seen = FxHashSet::default();

    for round in 0..5 {
        let folder = store
            .create_node(NodeKind::Folder, &format!("dir{round}"), None)
            .unwrap();
        let file = store
            .create_node(NodeKind::File, &format!("f{round}.rs"), Some(folder))
            .unwrap();
        assert!(seen.insert(folder));
        assert!(seen.insert(file));
        if round % 2 == 0 {
            assert!(store.delete_node(folder));
        }
    }

    let ids: Vec<_> = store.state().tree.iter().map(|n| n.id()).collect();
    let unique: FxHashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn delete_folder_removes_descendants_tabs_and_buffers() {
    let mut store = new_store();
    store.open_tab(id(6));
    store.open_tab(id(8));

    assert!(store.delete_node(id(1)));

    for gone in [1, 2, 3, 4, 5, 6, 7, 8] {
        assert!(store.state().tree.find(id(gone)).is_none(), "node {gone}");
    }
    assert!(!store.state().buffers.contains(id(6)));
    assert!(!store.state().buffers.contains(id(8)));
    assert_eq!(store.state().tabs.tabs(), &[TabKey::Welcome]);
    assert_eq!(store.state().tabs.active(), Some(TabKey::Welcome));
    assert!(store.state().explorer.rows.iter().all(|r| r.id != id(6)));
}

#[test]
fn delete_collapsed_folder_closes_only_its_files() {
    let mut store = new_store();
    store.open_tab(id(3));
    store.open_tab(id(4));
    store.open_tab(id(8));

    assert!(store.delete_node(id(2)));

    assert_eq!(
        store.state().tabs.tabs(),
        &[TabKey::Welcome, TabKey::File(id(8))]
    );
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(8))));
    assert!(!store.state().buffers.contains(id(3)));
    assert!(!store.state().buffers.contains(id(4)));
    assert!(store.state().buffers.contains(id(8)));
}

#[test]
fn delete_unknown_node_is_noop() {
    let mut store = new_store();
    let before = store.state().tree.len();
    assert!(!store.delete_node(id(404)));
    assert_eq!(store.state().tree.len(), before);
}

#[test]
fn toggle_folder_twice_restores_expanded() {
    let mut store = new_store();
    let before = store.state().tree.is_expanded(id(2));
    let rows_before = store.state().explorer.rows.len();

    assert!(store.toggle_folder(id(2)));
    assert_ne!(store.state().tree.is_expanded(id(2)), before);
    assert_ne!(store.state().explorer.rows.len(), rows_before);

    assert!(store.toggle_folder(id(2)));
    assert_eq!(store.state().tree.is_expanded(id(2)), before);
    assert_eq!(store.state().explorer.rows.len(), rows_before);

    assert!(!store.toggle_folder(id(6)));
}

#[test]
fn open_tab_twice_keeps_count_and_focus() {
    let mut store = new_store();
    store.open_tab(id(6));
    store.open_tab(id(8));
    let count = store.state().tabs.len();

    store.open_tab(id(6));
    assert_eq!(store.state().tabs.len(), count);
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(6))));
}

#[test]
fn open_tab_ignores_folders() {
    let mut store = new_store();
    assert!(!store.open_tab(id(1)));
    assert_eq!(store.state().tabs.len(), 1);
}

#[test]
fn open_seed_file_without_content_creates_empty_buffer() {
    let mut store = new_store();
    assert!(!store.state().buffers.contains(id(3)));
    store.open_tab(id(3));
    assert_eq!(store.state().buffers.text(id(3)).as_deref(), Some(""));
}

#[test]
fn close_active_tab_activates_last_remaining() {
    let mut store = new_store();
    store.open_tab(id(6));
    store.open_tab(id(8));
    store.activate_tab(TabKey::File(id(6)));

    assert!(store.close_tab(TabKey::File(id(6))));
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(8))));
}

#[test]
fn closing_only_tab_leaves_nothing_active() {
    let mut store = new_store();
    store.open_tab(id(6));
    store.close_tab(TabKey::Welcome);
    assert_eq!(store.state().explorer.selected(), Some(id(6)));

    store.close_tab(TabKey::File(id(6)));
    assert!(store.state().tabs.is_empty());
    assert_eq!(store.state().tabs.active(), None);
    assert_eq!(store.state().explorer.selected(), None);
}

#[test]
fn welcome_then_escrow_then_close_welcome() {
    let mut store = new_store();
    let escrow = store.state().tree.find_file_by_name("escrow.rs").unwrap();

    store.open_tab(escrow);
    assert_eq!(
        store.state().tabs.tabs(),
        &[TabKey::Welcome, TabKey::File(escrow)]
    );
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(escrow)));

    store.close_tab(TabKey::Welcome);
    assert_eq!(store.state().tabs.tabs(), &[TabKey::File(escrow)]);
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(escrow)));

    assert!(store.open_welcome_tab());
    assert_eq!(store.state().tabs.active(), Some(TabKey::Welcome));
    assert_eq!(store.state().tabs.len(), 2);
}

#[test]
fn activate_missing_tab_is_noop() {
    let mut store = new_store();
    assert!(!store.activate_tab(TabKey::File(id(6))));
    assert_eq!(store.state().tabs.active(), Some(TabKey::Welcome));
}

#[test]
fn rename_open_file_relabels_tab_and_keeps_content() {
    let mut store = new_store();
    store.open_tab(id(6));
    let before = store.state().buffers.text(id(6));

    store.rename_node(id(6), "vault.ts").unwrap();

    assert_eq!(store.state().tab_title(TabKey::File(id(6))), "vault.ts");
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(6))));
    assert_eq!(store.state().buffers.text(id(6)), before);
    assert_eq!(
        store.state().tree.find(id(6)).unwrap().extension(),
        Some("ts")
    );
}

#[test]
fn rename_errors_surface() {
    let mut store = new_store();
    assert_eq!(
        store.rename_node(id(404), "x"),
        Err(ProjectTreeError::NodeNotFound(id(404)))
    );
    assert_eq!(
        store.rename_node(id(6), "a/b"),
        Err(ProjectTreeError::InvalidName)
    );
}

#[test]
fn set_buffer_content_does_not_touch_tabs() {
    let mut store = new_store();
    assert!(store.set_buffer_content(id(4), "pub fn util() {}"));
    assert_eq!(
        store.state().buffers.text(id(4)).as_deref(),
        Some("pub fn util() {}")
    );
    assert_eq!(store.state().tabs.tabs(), &[TabKey::Welcome]);
    assert!(!store.set_buffer_content(id(1), "folder"));
}

#[test]
fn send_chat_message_schedules_one_reply() {
    let mut store = new_store();
    let effects = store.send_chat_message("hello");

    let last = store.state().chat.messages().last().unwrap();
    assert_eq!(last.role, ChatRole::User);
    assert_eq!(last.content, "hello");

    let [Effect::ScheduleChatReply { ticket, delay }] = effects.as_slice() else {
        panic!("expected one scheduled reply, got {effects:?}");
    };
    assert_eq!(*delay, Duration::from_millis(1000));

    assert!(store.dispatch(Action::ChatReplyDue { ticket: *ticket }).state_changed);
    assert!(!store.dispatch(Action::ChatReplyDue { ticket: *ticket }).state_changed);

    let replies = store
        .state()
        .chat
        .messages()
        .iter()
        .filter(|m| m.content == CANNED_REPLY)
        .count();
    assert_eq!(replies, 1);
}

#[test]
fn blank_chat_message_is_ignored() {
    let mut store = new_store();
    assert!(store.send_chat_message("  \t").is_empty());
    assert_eq!(store.state().chat.messages().len(), 1);
}

#[test]
fn second_send_cancels_first_reply() {
    let mut store = new_store();
    let first = store.send_chat_message("one");
    let second = store.send_chat_message("two");

    let Some(Effect::ScheduleChatReply { ticket: first_ticket, .. }) = first.first() else {
        panic!("no reply scheduled");
    };
    assert_eq!(
        second.first(),
        Some(&Effect::CancelChatReply {
            ticket: *first_ticket
        })
    );
}

#[test]
fn quit_cancels_pending_reply() {
    let mut store = new_store();
    store.send_chat_message("hi");
    let result = store.dispatch(Action::RunCommand(Command::Quit));

    assert!(store.state().ui.should_quit);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::CancelChatReply { .. }]
    ));
    assert!(store.state().chat.pending().is_none());
}

#[test]
fn chat_input_submit_via_command() {
    let mut store = new_store();
    for ch in "gm".chars() {
        store.dispatch(Action::ChatInputAppend(ch));
    }
    let result = store.dispatch(Action::RunCommand(Command::ChatSend));
    assert_eq!(result.effects.len(), 1);
    assert_eq!(store.state().chat.input(), "");
}

#[test]
fn new_file_dialog_validates_then_creates() {
    let mut store = new_store();
    store.state.explorer.set_selected(Some(id(6)));

    store.dispatch(Action::RunCommand(Command::ExplorerNewFile));
    let dialog = &store.state().ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.kind, Some(InputDialogKind::NewFile { parent: Some(id(5)) }));

    store.dispatch(Action::InputDialogAccept);
    assert_eq!(
        store.state().ui.input_dialog.error.as_deref(),
        Some("Name required")
    );

    type_into_dialog(&mut store, "a/b");
    store.dispatch(Action::InputDialogAccept);
    assert_eq!(
        store.state().ui.input_dialog.error.as_deref(),
        Some("Invalid name")
    );

    for _ in 0..3 {
        store.dispatch(Action::InputDialogBackspace);
    }
    type_into_dialog(&mut store, "  vault.rs ");
    store.dispatch(Action::InputDialogAccept);

    assert!(!store.state().ui.input_dialog.visible);
    let vault = store.state().tree.find_file_by_name("vault.rs").unwrap();
    assert_eq!(store.state().tree.find(vault).unwrap().parent(), Some(id(5)));
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(vault)));
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);
}

#[test]
fn cancel_dialog_creates_nothing() {
    let mut store = new_store();
    let before = store.state().tree.len();

    store.dispatch(Action::RunCommand(Command::NewFolder));
    type_into_dialog(&mut store, "scripts");
    store.dispatch(Action::RunCommand(Command::Escape));

    assert!(!store.state().ui.input_dialog.visible);
    assert_eq!(store.state().tree.len(), before);
}

#[test]
fn rename_dialog_prefills_and_unchanged_name_closes() {
    let mut store = new_store();
    store.state.explorer.set_selected(Some(id(8)));

    store.dispatch(Action::RunCommand(Command::ExplorerRename));
    assert_eq!(store.state().ui.input_dialog.value, "main.rs");

    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.state_changed);
    assert!(!store.state().ui.input_dialog.visible);
    assert_eq!(store.state().tree.name(id(8)), Some("main.rs"));
}

#[test]
fn delete_asks_for_confirmation() {
    let mut store = new_store();
    store.state.explorer.set_selected(Some(id(9)));

    store.dispatch(Action::RunCommand(Command::ExplorerDelete));
    let confirm = &store.state().ui.confirm_dialog;
    assert!(confirm.visible);
    assert_eq!(confirm.message, "Delete tests?");
    assert_eq!(
        confirm.on_confirm,
        Some(PendingAction::DeleteNode { id: id(9) })
    );

    store.dispatch(Action::ConfirmDialogCancel);
    assert!(store.state().tree.contains(id(9)));

    store.dispatch(Action::RunCommand(Command::ExplorerDelete));
    store.dispatch(Action::ConfirmDialogAccept);
    assert!(!store.state().tree.contains(id(9)));
    assert!(!store.state().tree.contains(id(10)));
}

#[test]
fn context_menu_items_depend_on_target() {
    let mut store = new_store();
    let file_row = store.state().explorer.row_index_of(id(6)).unwrap();
    let folder_row = store.state().explorer.row_index_of(id(5)).unwrap();

    store.dispatch(Action::ExplorerContextMenuOpen {
        tree_row: Some(file_row),
        x: 1,
        y: 1,
    });
    assert_eq!(
        store.state().ui.explorer_context_menu.items,
        vec![ExplorerContextMenuItem::Rename, ExplorerContextMenuItem::Delete]
    );

    store.dispatch(Action::ExplorerContextMenuOpen {
        tree_row: Some(folder_row),
        x: 1,
        y: 1,
    });
    assert_eq!(store.state().ui.explorer_context_menu.items.len(), 4);

    store.dispatch(Action::ExplorerContextMenuOpen {
        tree_row: None,
        x: 1,
        y: 1,
    });
    assert_eq!(store.state().ui.explorer_context_menu.target, None);
    assert_eq!(store.state().ui.explorer_context_menu.items.len(), 2);
}

#[test]
fn context_menu_new_file_targets_folder() {
    let mut store = new_store();
    let folder_row = store.state().explorer.row_index_of(id(9)).unwrap();

    store.dispatch(Action::ExplorerContextMenuOpen {
        tree_row: Some(folder_row),
        x: 0,
        y: 0,
    });
    store.dispatch(Action::ExplorerContextMenuMoveSelection { delta: -4 });
    assert_eq!(store.state().ui.explorer_context_menu.selected, 0);
    store.dispatch(Action::ExplorerContextMenuConfirm);

    assert!(!store.state().ui.explorer_context_menu.visible);
    assert_eq!(
        store.state().ui.input_dialog.kind,
        Some(InputDialogKind::NewFile { parent: Some(id(9)) })
    );
}

#[test]
fn context_menu_selection_wraps() {
    let mut store = new_store();
    store.dispatch(Action::ExplorerContextMenuOpen {
        tree_row: None,
        x: 0,
        y: 0,
    });
    store.dispatch(Action::ExplorerContextMenuMoveSelection { delta: -1 });
    assert_eq!(store.state().ui.explorer_context_menu.selected, 1);
    store.dispatch(Action::ExplorerContextMenuMoveSelection { delta: 1 });
    assert_eq!(store.state().ui.explorer_context_menu.selected, 0);
}

#[test]
fn explorer_activate_toggles_folders_and_opens_files() {
    let mut store = new_store();
    store.state.explorer.set_selected(Some(id(9)));
    store.dispatch(Action::ExplorerActivate);
    assert!(store.state().tree.is_expanded(id(9)));

    store.state.explorer.set_selected(Some(id(10)));
    store.dispatch(Action::ExplorerActivate);
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(10))));
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);
}

#[test]
fn explorer_collapse_walks_to_parent() {
    let mut store = new_store();
    store.state.explorer.set_selected(Some(id(6)));

    store.dispatch(Action::ExplorerCollapse);
    assert_eq!(store.state().explorer.selected(), Some(id(5)));

    store.dispatch(Action::ExplorerCollapse);
    assert!(!store.state().tree.is_expanded(id(5)));
}

#[test]
fn explorer_click_row_opens_file() {
    let mut store = new_store();
    let row = store.state().explorer.row_index_of(id(11)).unwrap();
    store.dispatch(Action::ExplorerClickRow { row });
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(11))));
    assert!(!store.dispatch(Action::ExplorerClickRow { row: 999 }).state_changed);
}

#[test]
fn editor_edits_write_through_active_buffer() {
    let mut store = new_store();
    store.open_tab(id(4));

    for ch in "fn x()".chars() {
        store.dispatch(Action::Editor(EditorAction::InsertChar(ch)));
    }
    store.dispatch(Action::RunCommand(Command::InsertNewline));
    store.dispatch(Action::RunCommand(Command::DeleteBackward));
    store.dispatch(Action::RunCommand(Command::CursorLineStart));
    store.dispatch(Action::RunCommand(Command::DeleteForward));

    assert_eq!(store.state().buffers.text(id(4)).as_deref(), Some("n x()"));
}

#[test]
fn editor_is_inert_on_welcome_tab() {
    let mut store = new_store();
    let result = store.dispatch(Action::Editor(EditorAction::InsertChar('x')));
    assert!(!result.state_changed);
}

#[test]
fn open_escrow_contract_command() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::OpenEscrowContract));
    assert_eq!(store.state().tabs.active(), Some(TabKey::File(id(6))));
}

#[test]
fn toggle_chat_moves_focus() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::ToggleChat));
    assert!(store.state().ui.chat_visible);
    assert_eq!(store.state().ui.focus, FocusTarget::Chat);

    store.dispatch(Action::RunCommand(Command::ToggleChat));
    assert!(!store.state().ui.chat_visible);
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);
}

#[test]
fn log_lines_land_in_terminal() {
    let mut store = new_store();
    store.dispatch(Action::LogLine("INFO ready".to_string()));
    assert_eq!(
        store.state().terminal.logs().back().map(String::as_str),
        Some("INFO ready")
    );
}
