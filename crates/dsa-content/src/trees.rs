//! Trees page

use dsa_core::{sections, Block, Card, CodeContent, Difficulty, ProblemEntry};

sections! {
    /// Tabs of the Trees page
    pub enum TreesSection {
        Fundamentals => ("fundamentals", "📚 Fundamentals", fundamentals),
        Traversals => ("traversals", "🚶 Traversals", traversals),
        Bst => ("bst", "🔎 Binary Search Trees", bst),
        BasicProblems => ("basic-problems", "🌱 Basic Problems", basic_problems),
        Advanced => ("advanced", "🌲 Advanced", advanced),
        Cheatsheet => ("cheatsheet", "📋 Cheat Sheet", cheatsheet),
    }
}

fn fundamentals() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "A tree is a connected graph with no cycles. One node is the root; every other \
             node has exactly one parent. In a binary tree each node has at most two children, \
             called left and right.",
        ),
        Block::Code {
            language: "text",
            code: r#"        1          depth 0  (root)
       / \
      2   3        depth 1
     / \   \
    4   5   6      depth 2  (4, 5, 6 are leaves)"#,
        },
        Block::Cards(vec![
            Card::new("📏", "Height", "Edges on the longest path from a node down to a leaf."),
            Card::new("🪜", "Depth", "Edges on the path from the root down to a node."),
            Card::new(
                "⚖️",
                "Balanced",
                "Heights of left and right subtrees differ by at most one at every node, so \
                 height stays O(log n).",
            ),
        ]),
        Block::Code {
            language: "javascript",
            code: r#"class TreeNode {
  constructor(val, left = null, right = null) {
    this.val = val;
    this.left = left;
    this.right = right;
  }
}"#,
        },
    ]
}

fn traversals() -> Vec<Block> {
    vec![
        Block::table(
            vec!["Order", "Visit sequence", "Result for the tree above", "Typical use"],
            vec![
                vec!["Preorder", "node, left, right", "1 2 4 5 3 6", "Copy / serialise a tree"],
                vec!["Inorder", "left, node, right", "4 2 5 1 3 6", "Sorted order of a BST"],
                vec!["Postorder", "left, right, node", "4 5 2 6 3 1", "Delete / aggregate children first"],
                vec!["Level order", "breadth first", "1 2 3 4 5 6", "Shortest depth, per-level views"],
            ],
        ),
        Block::Problem(
            ProblemEntry::new("Binary Tree Inorder Traversal", Difficulty::Easy)
                .description("Return the inorder traversal of a binary tree's node values.")
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function inorderTraversal(root) {
  const result = [];
  const stack = [];
  let node = root;

  while (node || stack.length) {
    while (node) {
      stack.push(node);
      node = node.left;
    }
    node = stack.pop();
    result.push(node.val);
    node = node.right;
  }
  return result;
}"#,
                    ),
                    (
                        "Python",
                        r#"def inorder_traversal(root) -> list[int]:
    result = []

    def visit(node):
        if node is None:
            return
        visit(node.left)
        result.append(node.val)
        visit(node.right)

    visit(root)
    return result"#,
                    ),
                    (
                        "Java",
                        r#"public List<Integer> inorderTraversal(TreeNode root) {
    List<Integer> result = new ArrayList<>();
    Deque<TreeNode> stack = new ArrayDeque<>();
    TreeNode node = root;

    while (node != null || !stack.isEmpty()) {
        while (node != null) {
            stack.push(node);
            node = node.left;
        }
        node = stack.pop();
        result.add(node.val);
        node = node.right;
    }
    return result;
}"#,
                    ),
                ]))
                .explanation(
                    "The recursive version is three lines. The iterative version makes the \
                     call stack explicit: walk left pushing nodes, pop one, visit it, then \
                     continue from its right child.",
                )
                .approach(
                    vec![
                        "Push nodes while walking down the left spine.",
                        "Pop the deepest node and record it.",
                        "Move to its right subtree and repeat.",
                    ],
                    "O(n)",
                    "O(h) where h is the tree height",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("Level Order Traversal", Difficulty::Medium)
                .description("Return the node values level by level, left to right.")
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function levelOrder(root) {
  if (!root) return [];
  const levels = [];
  let queue = [root];

  while (queue.length) {
    levels.push(queue.map((n) => n.val));
    queue = queue.flatMap((n) => [n.left, n.right].filter(Boolean));
  }
  return levels;
}"#,
                    ),
                    (
                        "Python",
                        r#"from collections import deque

def level_order(root) -> list[list[int]]:
    if root is None:
        return []
    levels, queue = [], deque([root])

    while queue:
        level = []
        for _ in range(len(queue)):
            node = queue.popleft()
            level.append(node.val)
            if node.left:
                queue.append(node.left)
            if node.right:
                queue.append(node.right)
        levels.append(level)

    return levels"#,
                    ),
                ]))
                .explanation(
                    "A queue processes nodes in the order they were discovered. Capturing the \
                     queue length at the start of each round separates one level from the \
                     next.",
                ),
        ),
    ]
}

fn bst() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "In a binary search tree every value in a node's left subtree is smaller than the \
             node and every value in its right subtree is larger. Search, insert and delete \
             follow a single root-to-leaf path, so they cost O(h).",
        ),
        Block::warning(
            "Checking only each node against its direct children is not enough. A valid BST \
             needs every node to respect the bounds inherited from all of its ancestors.",
        ),
        Block::Problem(
            ProblemEntry::new("Validate Binary Search Tree", Difficulty::Medium)
                .description("Determine whether a binary tree is a valid binary search tree.")
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function isValidBST(root, low = -Infinity, high = Infinity) {
  if (!root) return true;
  if (root.val <= low || root.val >= high) return false;
  return (
    isValidBST(root.left, low, root.val) &&
    isValidBST(root.right, root.val, high)
  );
}"#,
                    ),
                    (
                        "Python",
                        r#"def is_valid_bst(root, low=float("-inf"), high=float("inf")) -> bool:
    if root is None:
        return True
    if not low < root.val < high:
        return False
    return (is_valid_bst(root.left, low, root.val)
            and is_valid_bst(root.right, root.val, high))"#,
                    ),
                    (
                        "Java",
                        r#"public boolean isValidBST(TreeNode root) {
    return valid(root, Long.MIN_VALUE, Long.MAX_VALUE);
}

private boolean valid(TreeNode node, long low, long high) {
    if (node == null) return true;
    if (node.val <= low || node.val >= high) return false;
    return valid(node.left, low, node.val) && valid(node.right, node.val, high);
}"#,
                    ),
                ]))
                .explanation(
                    "Pass down an open interval (low, high). Going left tightens the upper \
                     bound to the parent's value; going right tightens the lower bound.",
                )
                .approach(
                    vec![
                        "Start with the interval (-∞, +∞) at the root.",
                        "Fail if the node's value is outside its interval.",
                        "Recurse left with (low, node.val).",
                        "Recurse right with (node.val, high).",
                    ],
                    "O(n)",
                    "O(h)",
                ),
        ),
    ]
}

fn basic_problems() -> Vec<Block> {
    vec![
        Block::Problem(
            ProblemEntry::new("1. Maximum Depth of Binary Tree", Difficulty::Easy)
                .description(
                    "Return the number of nodes along the longest path from the root down to \
                     the farthest leaf.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function maxDepth(root) {
  if (!root) return 0;
  return 1 + Math.max(maxDepth(root.left), maxDepth(root.right));
}"#,
                    ),
                    (
                        "Python",
                        r#"def max_depth(root) -> int:
    if root is None:
        return 0
    return 1 + max(max_depth(root.left), max_depth(root.right))"#,
                    ),
                    (
                        "Java",
                        r#"public int maxDepth(TreeNode root) {
    if (root == null) return 0;
    return 1 + Math.max(maxDepth(root.left), maxDepth(root.right));
}"#,
                    ),
                ]))
                .explanation(
                    "An empty tree has depth 0. Otherwise the depth is one more than the deeper \
                     of the two subtrees.",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("2. Invert Binary Tree", Difficulty::Easy)
                .description("Mirror a binary tree by swapping every node's left and right child.")
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function invertTree(root) {
  if (!root) return null;
  [root.left, root.right] = [invertTree(root.right), invertTree(root.left)];
  return root;
}"#,
                    ),
                    (
                        "Python",
                        r#"def invert_tree(root):
    if root is None:
        return None
    root.left, root.right = invert_tree(root.right), invert_tree(root.left)
    return root"#,
                    ),
                ]))
                .explanation(
                    "Inverting a tree is inverting both subtrees and swapping them. Any \
                     traversal order works as long as each node is swapped exactly once.",
                )
                .approach(
                    vec![
                        "Return null for an empty subtree.",
                        "Invert the right subtree and the left subtree.",
                        "Assign them to the opposite sides.",
                    ],
                    "O(n)",
                    "O(h)",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("3. Same Tree", Difficulty::Easy)
                .description("Check whether two binary trees are structurally identical with equal values.")
                .code(CodeContent::single(
                    r#"function isSameTree(p, q) {
  if (!p || !q) return p === q;
  return p.val === q.val && isSameTree(p.left, q.left) && isSameTree(p.right, q.right);
}"#,
                ))
                .explanation(
                    "Two empty trees are equal; one empty and one not are different. Otherwise \
                     compare the roots and recurse on both pairs of children.",
                ),
        ),
    ]
}

fn advanced() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Harder tree problems usually combine a traversal with information passed up \
             (return values) or down (parameters).",
        ),
        Block::Problem(
            ProblemEntry::new("Lowest Common Ancestor", Difficulty::Medium)
                .description(
                    "Given a binary tree and two nodes p and q, return their lowest common \
                     ancestor: the deepest node that has both as descendants (a node is a \
                     descendant of itself).",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function lowestCommonAncestor(root, p, q) {
  if (!root || root === p || root === q) return root;
  const left = lowestCommonAncestor(root.left, p, q);
  const right = lowestCommonAncestor(root.right, p, q);
  if (left && right) return root;
  return left ?? right;
}"#,
                    ),
                    (
                        "Java",
                        r#"public TreeNode lowestCommonAncestor(TreeNode root, TreeNode p, TreeNode q) {
    if (root == null || root == p || root == q) return root;
    TreeNode left = lowestCommonAncestor(root.left, p, q);
    TreeNode right = lowestCommonAncestor(root.right, p, q);
    if (left != null && right != null) return root;
    return left != null ? left : right;
}"#,
                    ),
                ]))
                .explanation(
                    "Each call reports whether it found p or q below it. The first node that \
                     hears back from both sides is the answer; otherwise it forwards whichever \
                     side found something.",
                )
                .approach(
                    vec![
                        "Return the node itself if it is null, p or q.",
                        "Search both subtrees.",
                        "If both sides return a node, the current node is the LCA.",
                        "Otherwise propagate the non-null side upward.",
                    ],
                    "O(n)",
                    "O(h)",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("Binary Tree Maximum Path Sum", Difficulty::Hard)
                .description(
                    "A path is any sequence of nodes connected by edges, each used at most \
                     once. Return the maximum sum of values along any non-empty path.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function maxPathSum(root) {
  let best = -Infinity;

  function gain(node) {
    if (!node) return 0;
    const left = Math.max(gain(node.left), 0);
    const right = Math.max(gain(node.right), 0);
    best = Math.max(best, node.val + left + right);
    return node.val + Math.max(left, right);
  }

  gain(root);
  return best;
}"#,
                    ),
                    (
                        "Python",
                        r#"def max_path_sum(root) -> int:
    best = float("-inf")

    def gain(node) -> int:
        nonlocal best
        if node is None:
            return 0
        left = max(gain(node.left), 0)
        right = max(gain(node.right), 0)
        best = max(best, node.val + left + right)
        return node.val + max(left, right)

    gain(root)
    return best"#,
                    ),
                ]))
                .explanation(
                    "At each node, a path may bend through it using both children, but can only \
                     extend upward through one. Negative branches are dropped by clamping to 0.",
                )
                .approach(
                    vec![
                        "Compute the best downward gain from each child, clamped at 0.",
                        "Update the global best with node + left + right.",
                        "Return node + the larger gain to the parent.",
                    ],
                    "O(n)",
                    "O(h)",
                ),
        ),
    ]
}

fn cheatsheet() -> Vec<Block> {
    vec![
        Block::table(
            vec!["Operation", "Balanced BST", "Skewed BST", "Heap"],
            vec![
                vec!["Search", "O(log n)", "O(n)", "O(n)"],
                vec!["Insert", "O(log n)", "O(n)", "O(log n)"],
                vec!["Delete", "O(log n)", "O(n)", "O(log n)"],
                vec!["Min / Max", "O(log n)", "O(n)", "O(1) for the heap's end"],
            ],
        ),
        Block::titled_bullets(
            "Which traversal?",
            vec![
                "Need sorted output from a BST: inorder.",
                "Need parents before children (copy, serialise): preorder.",
                "Need children before parents (heights, sums, deletion): postorder.",
                "Need the nearest or per-level answer: level order with a queue.",
            ],
        ),
        Block::tip(
            "Most recursive tree solutions have the same shape: handle null, recurse left, \
             recurse right, combine. Decide first what each call returns.",
        ),
    ]
}
