//! End-to-end searches on small hand-drawn grids.

use wayfind::{
    OpenList, PathFinder, PathResult, SearchConfig, SearchState, Strategy, find_path, path_cost,
};
use wayfind_grid::{GridRequest, Movement, Point, Terrain};

fn open_5x5() -> Terrain {
    Terrain::new(5, 5)
}

fn assert_walkable_path(terrain: &Terrain, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
    }
    assert!(path.iter().all(|&p| terrain.is_walkable(p)));
}

#[test]
fn astar_across_open_grid() {
    let terrain = open_5x5();
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));
    let req = GridRequest::new(&terrain, goal);

    let path = find_path(start, goal, Strategy::AStar, &req).into_path().unwrap();
    assert_eq!(path.len(), 9);
    assert_eq!(path_cost(&req, &path), 8);
    assert_walkable_path(&terrain, &path, start, goal);
}

#[test]
fn breadth_first_matches_astar_on_uniform_costs() {
    let terrain = open_5x5();
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));
    let req = GridRequest::new(&terrain, goal);

    let bfs = find_path(start, goal, Strategy::BreadthFirst, &req);
    let astar = find_path(start, goal, Strategy::AStar, &req);
    assert_eq!(bfs.len(), 9);
    assert_eq!(bfs.len(), astar.len());
    assert_eq!(path_cost(&req, bfs.path().unwrap()), 8);
    assert_walkable_path(&terrain, bfs.path().unwrap(), start, goal);
}

#[test]
fn start_equals_goal() {
    let terrain = open_5x5();
    let origin = Point::new(0, 0);
    let req = GridRequest::new(&terrain, origin);
    for s in Strategy::ALL {
        let report = PathFinder::default().search(origin, origin, s, &req);
        assert_eq!(report.state(), SearchState::GoalReached, "{s}");
        assert_eq!(report.result(), &PathResult::Found(vec![origin]));
    }
}

#[test]
fn isolated_goal_has_no_path() {
    let terrain = Terrain::from_ascii(
        "
        .....
        .....
        .....
        ....#
        ...#.
        ",
    )
    .unwrap();
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));
    let req = GridRequest::new(&terrain, goal);
    for s in Strategy::ALL {
        let report = PathFinder::default().search(start, goal, s, &req);
        assert_eq!(report.state(), SearchState::Exhausted, "{s}");
        assert_eq!(report.result(), &PathResult::NoPath);
        // every reachable cell was discovered, the goal never was
        assert_eq!(report.visited(), 22, "{s}");
        assert!(report.open_list().lookup(&goal).is_none());
    }
}

#[test]
fn relaxed_node_pops_with_lower_priority() {
    let mut open: OpenList<Point, i32> = OpenList::new();
    let (root, cheap, p, q) = (
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(2, 2),
        Point::new(3, 3),
    );
    let root_id = open.insert(root, 0, 0, None);
    open.insert(p, 10, 0, Some(root_id));
    open.insert(q, 6, 0, Some(root_id));
    let cheap_id = open.insert(cheap, 1, 0, Some(root_id));

    assert_eq!(open.pop_best().map(|n| *n.position()), Some(root));
    assert_eq!(open.pop_best().map(|n| *n.position()), Some(cheap));

    assert!(open.relax(&p, 4, cheap_id));
    assert_eq!(open.peek().map(|n| *n.position()), Some(p));
    let popped = open.pop_best().unwrap();
    assert_eq!((popped.g(), popped.f()), (4, 4));
    assert_eq!(open.path_to(popped.id()), vec![root, cheap, p]);
    assert_eq!(open.pop_best().map(|n| *n.position()), Some(q));
}

#[test]
fn cost_aware_strategies_avoid_swamp() {
    // A direct route through the 9s, or a detour along the walkable rim.
    let terrain = Terrain::from_ascii(
        "
        .....
        .999.
        .999.
        .999.
        .....
        ",
    )
    .unwrap();
    let (start, goal) = (Point::new(0, 2), Point::new(4, 2));
    let req = GridRequest::new(&terrain, goal);

    for s in [Strategy::Dijkstra, Strategy::AStar] {
        let report = PathFinder::default().search(start, goal, s, &req);
        let path = report.result().path().unwrap();
        assert_eq!(path_cost(&req, path), 8, "{s}");
        assert_eq!(report.cost(), Some(8));
        assert!(path.iter().all(|&p| terrain.cost_at(p) == Some(1)), "{s}");
    }

    let bfs = find_path(start, goal, Strategy::BreadthFirst, &req);
    assert_eq!(bfs.len(), 5);
    assert_eq!(path_cost(&req, bfs.path().unwrap()), 28);

    let greedy = find_path(start, goal, Strategy::GreedyBestFirst, &req);
    assert!(path_cost(&req, greedy.path().unwrap()) > 8);
}

#[test]
fn diagonal_movement_shortens_paths() {
    let terrain = open_5x5();
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));
    let req = GridRequest::new(&terrain, goal).with_movement(Movement::Diagonal);

    for s in Strategy::ALL {
        let path = find_path(start, goal, s, &req).into_path().unwrap();
        assert_eq!(path.len(), 5, "{s}");
        assert_walkable_path(&terrain, &path, start, goal);
    }
}

#[test]
fn maze_with_wide_heap() {
    let terrain = Terrain::from_ascii(
        "
        .#.....
        .#.###.
        .#.#...
        .#.#.##
        ...#...
        ",
    )
    .unwrap();
    let (start, goal) = (Point::new(0, 0), Point::new(6, 4));
    let req = GridRequest::new(&terrain, goal);
    let finder = PathFinder::new(SearchConfig::default().with_branch_factor(4)).unwrap();

    let path = finder
        .find_path(start, goal, Strategy::AStar, &req)
        .into_path()
        .unwrap();
    assert_walkable_path(&terrain, &path, start, goal);
    assert_eq!(path_cost(&req, &path), 22);
    assert_eq!(find_path(start, goal, Strategy::Dijkstra, &req).len(), path.len());
}

#[test]
fn parent_map_covers_explored_region() {
    let terrain = open_5x5();
    let (start, goal) = (Point::new(2, 2), Point::new(4, 2));
    let req = GridRequest::new(&terrain, goal);
    let report = PathFinder::default().search(start, goal, Strategy::BreadthFirst, &req);

    let parents = report.parent_map();
    assert_eq!(parents.len(), report.visited() - 1);
    assert!(!parents.contains_key(&start));
    for (child, parent) in &parents {
        assert!(child.is_adjacent(*parent));
    }
    // walking parents from the goal reproduces the path
    let mut walk = vec![goal];
    while let Some(&p) = parents.get(walk.last().unwrap()) {
        walk.push(p);
    }
    walk.reverse();
    assert_eq!(report.result().path(), Some(&walk[..]));
}
