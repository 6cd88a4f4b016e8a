use super::*;
use crate::models::NodeKind;

fn sample_tree() -> (ProjectTree, NodeId, NodeId, NodeId) {
    let mut tree = ProjectTree::new();
    let src = tree.insert_under(None, "src", NodeKind::Folder).unwrap();
    let main = tree.insert_under(Some(src), "main.rs", NodeKind::File).unwrap();
    let readme = tree.insert_under(None, "README.md", NodeKind::File).unwrap();
    (tree, src, main, readme)
}

#[test]
fn explorer_move_selection_starts_at_first_row() {
    let (tree, src, main, _) = sample_tree();
    let mut explorer = ExplorerState::new(&tree);
    assert!(explorer.selected().is_none());

    assert!(explorer.move_selection(1));
    assert_eq!(explorer.selected(), Some(src));
    assert!(explorer.move_selection(1));
    assert_eq!(explorer.selected(), Some(main));
}

#[test]
fn explorer_move_selection_clamps_at_edges() {
    let (tree, src, _, readme) = sample_tree();
    let mut explorer = ExplorerState::new(&tree);

    assert!(explorer.move_selection(-1));
    assert_eq!(explorer.selected(), Some(readme));
    assert!(!explorer.move_selection(5));

    assert!(explorer.move_selection(-10));
    assert_eq!(explorer.selected(), Some(src));
    assert!(!explorer.move_selection(-1));
}

#[test]
fn explorer_refresh_drops_selection_of_removed_node() {
    let (mut tree, src, main, _) = sample_tree();
    let mut explorer = ExplorerState::new(&tree);
    explorer.set_selected(Some(main));

    tree.remove(src);
    explorer.refresh_rows(&tree);

    assert!(explorer.selected().is_none());
    assert_eq!(explorer.rows.len(), 1);
}

#[test]
fn explorer_keeps_selected_row_visible() {
    let mut tree = ProjectTree::new();
    let ids: Vec<_> = (0..20)
        .map(|i| {
            tree.insert_under(None, &format!("f{i}.rs"), NodeKind::File)
                .unwrap()
        })
        .collect();
    let mut explorer = ExplorerState::new(&tree);
    explorer.set_view_height(5);

    explorer.set_selected(Some(ids[12]));
    assert_eq!(explorer.scroll_offset, 8);

    explorer.set_selected(Some(ids[2]));
    assert_eq!(explorer.scroll_offset, 2);

    assert!(explorer.scroll(100));
    assert_eq!(explorer.scroll_offset, 15);
}

#[test]
fn create_parent_follows_selection() {
    let (tree, src, main, readme) = sample_tree();
    let mut explorer = ExplorerState::new(&tree);
    assert_eq!(explorer.create_parent(&tree), None);

    explorer.set_selected(Some(src));
    assert_eq!(explorer.create_parent(&tree), Some(src));

    explorer.set_selected(Some(main));
    assert_eq!(explorer.create_parent(&tree), Some(src));

    explorer.set_selected(Some(readme));
    assert_eq!(explorer.create_parent(&tree), None);
}

#[test]
fn input_dialog_open_places_cursor_at_end() {
    let mut dialog = InputDialogState::default();
    dialog.open(InputDialogKind::Rename { id: NodeId::new(3) }, "lib.rs".to_string());

    assert!(dialog.visible);
    assert_eq!(dialog.title, "Rename");
    assert_eq!(dialog.cursor, "lib.rs".len());

    dialog.reset();
    assert!(!dialog.visible);
    assert!(dialog.kind.is_none());
}

#[test]
fn tab_title_tracks_tree_names() {
    let (mut tree, _, main, _) = sample_tree();
    tree.rename(main, "app.rs").unwrap();
    let state = AppState::new(tree, BufferStore::new(), IdeConfig::default());

    assert_eq!(state.tab_title(TabKey::Welcome), "Welcome");
    assert_eq!(state.tab_title(TabKey::File(main)), "app.rs");
}
