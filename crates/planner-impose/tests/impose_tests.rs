use planner_impose::*;

#[test]
fn test_pad_pages_to_multiple_of_four() {
    let mut pages: Vec<Option<u32>> = vec![Some(1)];
    pad_pages(&mut pages);
    assert_eq!(pages.len(), 4);
    assert_eq!(pages[0], Some(1));
    assert_eq!(&pages[1..], &[None, None, None]);

    let mut pages: Vec<Option<u32>> = (1..=6).map(Some).collect();
    pad_pages(&mut pages);
    assert_eq!(pages.len(), 8);
}

#[test]
fn test_pad_pages_already_aligned() {
    let mut pages: Vec<Option<u32>> = (1..=4).map(Some).collect();
    pad_pages(&mut pages);
    assert_eq!(pages.len(), 4);

    let mut empty: Vec<Option<u32>> = Vec::new();
    pad_pages(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_groups_are_independent() {
    let pages: Vec<Option<u32>> = (1..=8).map(Some).collect();
    let sheets = impose(pages, SheetOrder::Reordered);

    assert_eq!(sheets.len(), 4);
    // First group of four
    assert_eq!(sheets[0], Sheet::new(Some(4), Some(1)));
    assert_eq!(sheets[1], Sheet::new(Some(2), Some(3)));
    // Second group repeats the same pattern with its own pages
    assert_eq!(sheets[2], Sheet::new(Some(8), Some(5)));
    assert_eq!(sheets[3], Sheet::new(Some(6), Some(7)));
}

#[test]
fn test_natural_flatten_round_trip() {
    let pages: Vec<Option<u32>> = (1..=12).map(Some).collect();
    let sheets = impose(pages.clone(), SheetOrder::Natural);

    // Reading sheets left then right reproduces the input order
    let flattened: Vec<Option<u32>> = sheets
        .into_iter()
        .flat_map(|sheet| [sheet.left, sheet.right])
        .collect();
    assert_eq!(flattened, pages);
}

#[test]
fn test_reordered_cut_and_stack_round_trip() {
    let pages: Vec<Option<u32>> = (1..=8).map(Some).collect();
    let sheets = impose(pages.clone(), SheetOrder::Reordered);

    // Per sheet pair, A printed on the front of the paper and B on the
    // back: cutting down the middle leaves the right half reading
    // [A.right, B.left] and the left half [B.right, A.left].
    let mut recollated = Vec::new();
    for pair in sheets.chunks_exact(2) {
        let a = &pair[0];
        let b = &pair[1];
        recollated.push(a.right);
        recollated.push(b.left);
        recollated.push(b.right);
        recollated.push(a.left);
    }
    assert_eq!(recollated, pages);
}

#[test]
fn test_sheet_is_blank() {
    assert!(Sheet::<u32>::new(None, None).is_blank());
    assert!(!Sheet::new(Some(1), None).is_blank());
    assert!(!Sheet::new(None, Some(1)).is_blank());
}
