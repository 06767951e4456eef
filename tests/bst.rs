use classic_collections::bst::BinarySearchTree;
use classic_collections::traversal::Order;
use classic_collections::Error;

use rstest::{fixture, rstest};

const SCENARIO: [i32; 10] = [50, 30, 70, 20, 40, 60, 80, 10, 45, 90];

#[fixture]
fn bst() -> BinarySearchTree<i32> {
    let _ = pretty_env_logger::try_init();
    SCENARIO.iter().copied().collect()
}

#[fixture]
fn empty() -> BinarySearchTree<i32> {
    BinarySearchTree::new()
}

fn inorder(tree: &BinarySearchTree<i32>) -> Vec<i32> {
    tree.inorder().copied().collect()
}

fn is_strictly_ascending(xs: &[i32]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

#[rstest]
fn size_of_scenario(bst: BinarySearchTree<i32>) {
    assert_eq!(bst.len(), 10);
    assert!(!bst.is_empty());
}

#[rstest]
fn duplicate_insert_keeps_size(mut bst: BinarySearchTree<i32>) {
    assert!(!bst.insert(50));
    assert_eq!(bst.len(), 10);
    assert!(bst.contains(&50));
    assert!(bst.contains(&30));
    assert!(bst.contains(&70));
}

#[rstest]
#[case::leaf(10)]
#[case::one_child(80)]
#[case::two_children(30)]
#[case::root(50)]
fn delete_present_element(mut bst: BinarySearchTree<i32>, #[case] target: i32) {
    assert_eq!(bst.delete(&target), Some(target));

    assert_eq!(bst.len(), 9);
    assert!(!bst.contains(&target));
    let sorted = inorder(&bst);
    assert!(is_strictly_ascending(&sorted));
    assert!(!sorted.contains(&target));
    assert_eq!(sorted.len(), 9);
}

#[rstest]
#[case(100)]
#[case(25)]
#[case(-5)]
fn delete_absent_element(mut bst: BinarySearchTree<i32>, #[case] target: i32) {
    assert_eq!(bst.delete(&target), None);
    assert_eq!(bst.len(), 10);
    assert_eq!(inorder(&bst), [10, 20, 30, 40, 45, 50, 60, 70, 80, 90]);
}

#[rstest]
fn delete_from_empty_tree(mut empty: BinarySearchTree<i32>) {
    assert_eq!(empty.delete(&50), None);
    assert_eq!(empty.len(), 0);
}

#[rstest]
fn deletes_in_sequence(mut bst: BinarySearchTree<i32>) {
    bst.delete(&10);
    assert_eq!(bst.len(), 9);

    bst.delete(&80);
    assert!(bst.contains(&90));
    assert_eq!(bst.len(), 8);

    bst.delete(&30);
    assert!(bst.contains(&20));
    assert!(bst.contains(&40));
    assert_eq!(bst.len(), 7);

    bst.delete(&50);
    assert!(!bst.contains(&50));
    assert!(bst.contains(&70));
    assert_eq!(bst.len(), 6);
}

#[rstest]
fn delete_all_elements(mut bst: BinarySearchTree<i32>) {
    for x in [10, 20, 45, 40, 30, 60, 90, 80, 70, 50].iter() {
        bst.delete(x);
    }

    assert!(bst.is_empty());
    assert_eq!(bst.len(), 0);
    assert_eq!(bst.height(), -1);

    bst.insert(100);
    assert!(!bst.is_empty());
    assert_eq!(bst.len(), 1);
}

#[rstest]
fn heights(bst: BinarySearchTree<i32>, mut empty: BinarySearchTree<i32>) {
    assert_eq!(bst.height(), 3);

    assert_eq!(empty.height(), -1);
    empty.insert(50);
    assert_eq!(empty.height(), 0);
    empty.insert(30);
    assert_eq!(empty.height(), 1);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(64)]
fn sorted_insertion_degenerates(#[case] k: i32) {
    let tree: BinarySearchTree<_> = (1..=k).collect();

    assert_eq!(tree.len(), k as usize);
    assert_eq!(tree.height(), (k - 1) as isize);
    assert_eq!(tree.min(), Ok(&1));
    assert_eq!(tree.max(), Ok(&k));
}

#[rstest]
fn min_and_max(mut bst: BinarySearchTree<i32>, mut empty: BinarySearchTree<i32>) {
    assert_eq!(bst.min(), Ok(&10));
    assert_eq!(bst.max(), Ok(&90));

    bst.delete(&10);
    assert_eq!(bst.min(), Ok(&20));
    bst.delete(&90);
    assert_eq!(bst.max(), Ok(&80));

    assert_eq!(empty.min(), Err(Error::EmptyContainer));
    assert_eq!(empty.max(), Err(Error::EmptyContainer));
    empty.insert(5);
    assert_eq!(empty.min(), Ok(&5));
    assert_eq!(empty.max(), Ok(&5));
}

#[rstest]
fn negative_numbers() {
    let tree: BinarySearchTree<_> = [-10, -5, -20, 0, 5].iter().copied().collect();

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.min(), Ok(&-20));
    assert_eq!(tree.max(), Ok(&5));
    assert!(tree.contains(&-10));
    assert!(tree.contains(&0));
}

#[rstest]
#[case::inorder(Order::InOrder, "In-order: 10 20 30 40 45 50 60 70 80 90\n")]
#[case::preorder(Order::PreOrder, "Pre-order: 50 30 20 10 40 45 70 60 80 90\n")]
#[case::postorder(Order::PostOrder, "Post-order: 10 20 45 40 30 60 90 80 70 50\n")]
#[case::levelorder(Order::LevelOrder, "Level-order: 50 30 70 20 40 60 80 10 45 90\n")]
fn rendered_traversals(
    bst: BinarySearchTree<i32>,
    #[case] order: Order,
    #[case] expected: &str,
) {
    assert_eq!(bst.render(order).to_string(), expected);
    bst.log_traversal(order);
}

#[rstest]
fn traversals_of_empty_tree(empty: BinarySearchTree<i32>) {
    for order in Order::ALL.iter() {
        assert_eq!(empty.traverse(*order).count(), 0);
        assert_eq!(empty.render(*order).to_string(), format!("{}: \n", order));
    }
}

#[rstest]
fn ordering_survives_mixed_operations(mut bst: BinarySearchTree<i32>) {
    bst.delete(&30);
    bst.insert(35);
    bst.delete(&70);
    bst.insert(75);

    let sorted = inorder(&bst);
    assert!(is_strictly_ascending(&sorted));
    assert_eq!(sorted, [10, 20, 35, 40, 45, 50, 60, 75, 80, 90]);
}

#[rstest]
fn string_representation(bst: BinarySearchTree<i32>, empty: BinarySearchTree<i32>) {
    assert_eq!(bst.to_string(), "BST[10 20 30 40 45 50 60 70 80 90]");
    assert_eq!(empty.to_string(), "BST[]");
}

#[rstest]
fn borrowed_iteration_is_inorder(bst: BinarySearchTree<i32>) {
    let mut seen = Vec::new();
    for x in &bst {
        seen.push(*x);
    }
    assert_eq!(seen, inorder(&bst));
}
