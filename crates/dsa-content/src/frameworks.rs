//! Problem-Solving Frameworks page

use dsa_core::{sections, Block, Card, CodeContent, Difficulty, ProblemEntry};

sections! {
    /// Tabs of the Problem-Solving Frameworks page
    pub enum FrameworksSection {
        Overview => ("overview", "🧭 Overview", overview),
        Umpire => ("umpire", "⚾ UMPIRE Method", umpire),
        Patterns => ("patterns", "🧩 Common Patterns", patterns),
        Complexity => ("complexity", "⏱️ Big-O", complexity),
        BinarySearch => ("binary-search", "🔍 Binary Search", binary_search),
        Practice => ("practice", "🏋️ Practice", practice),
    }
}

fn overview() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Most interview and contest problems are variations of a small number of ideas. A \
             framework gives you a checklist to run through when the problem is unfamiliar, so \
             you spend your time on insight instead of on getting started.",
        ),
        Block::Cards(vec![
            Card::new(
                "🎯",
                "Understand first",
                "Restate the problem, list the inputs and outputs, and write two or three \
                 examples by hand before touching code.",
            ),
            Card::new(
                "🗺️",
                "Match a pattern",
                "Ask which known technique fits: two pointers, hashing, sliding window, binary \
                 search, recursion, BFS/DFS.",
            ),
            Card::new(
                "🧪",
                "Verify",
                "Trace your code on the examples and on edge cases: empty input, one element, \
                 duplicates, negatives.",
            ),
        ]),
        Block::note(
            "A brute-force solution is a valid first step. Write it down, state its \
             complexity, then look for the repeated work it does.",
        ),
    ]
}

fn umpire() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "UMPIRE is a six-step method for structured problem solving. Each step has a \
             concrete output you can point to.",
        ),
        Block::table(
            vec!["Step", "Question", "Output"],
            vec![
                vec!["U — Understand", "What exactly is asked?", "Restated problem and examples"],
                vec!["M — Match", "Which patterns apply?", "Candidate techniques"],
                vec!["P — Plan", "What are the steps?", "Pseudocode"],
                vec!["I — Implement", "Translate the plan", "Working code"],
                vec!["R — Review", "Does it handle every case?", "Traced examples"],
                vec!["E — Evaluate", "How fast, how much memory?", "Big-O and trade-offs"],
            ],
        ),
        Block::steps(
            "Questions worth asking in the Understand step",
            vec![
                "Can the input be empty? Can it contain duplicates or negatives?",
                "Is the input sorted, or can I sort it?",
                "What should happen when there is no valid answer?",
                "How large can the input get? That bounds the acceptable complexity.",
            ],
        ),
    ]
}

fn patterns() -> Vec<Block> {
    vec![
        Block::table(
            vec!["Signal in the problem", "Pattern to try"],
            vec![
                vec!["Sorted array, find a pair", "Two pointers"],
                vec!["Contiguous subarray or substring", "Sliding window"],
                vec!["Have I seen this value before?", "Hash map / set"],
                vec!["Minimum that satisfies a condition", "Binary search on the answer"],
                vec!["All combinations or permutations", "Backtracking"],
                vec!["Overlapping subproblems", "Dynamic programming"],
                vec!["Shortest path, unweighted", "Breadth-first search"],
                vec!["Hierarchy or nesting", "Tree / recursion"],
            ],
        ),
        Block::tip(
            "If the constraints allow n up to 10⁵, an O(n²) solution will usually time out; \
             look for O(n log n) or O(n).",
        ),
    ]
}

fn complexity() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Big-O describes how running time or memory grows with input size, ignoring \
             constant factors. It lets you reject an approach before writing it.",
        ),
        Block::table(
            vec!["Class", "Name", "Example", "n = 10⁶ feasible?"],
            vec![
                vec!["O(1)", "Constant", "Array index", "Yes"],
                vec!["O(log n)", "Logarithmic", "Binary search", "Yes"],
                vec!["O(n)", "Linear", "Single pass", "Yes"],
                vec!["O(n log n)", "Linearithmic", "Merge sort", "Yes"],
                vec!["O(n²)", "Quadratic", "Nested loops", "No"],
                vec!["O(2ⁿ)", "Exponential", "All subsets", "No"],
            ],
        ),
        Block::titled_bullets(
            "Rules of thumb",
            vec![
                "Sequential steps add: O(n) + O(n log n) = O(n log n).",
                "Nested loops multiply: a loop inside a loop over n is O(n²).",
                "Halving the input each step gives O(log n).",
                "Recursion depth counts as space even without allocation.",
            ],
        ),
    ]
}

fn binary_search() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Binary search finds a target in a sorted range by repeatedly halving the search \
             space. The same idea applies to any monotonic yes/no predicate, not just arrays.",
        ),
        Block::Problem(
            ProblemEntry::new("Classic Binary Search", Difficulty::Easy)
                .description(
                    "Given a sorted array of integers and a target, return the index of the \
                     target or -1 if it is not present.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function binarySearch(nums, target) {
  let lo = 0;
  let hi = nums.length - 1;

  while (lo <= hi) {
    const mid = lo + Math.floor((hi - lo) / 2);
    if (nums[mid] === target) return mid;
    if (nums[mid] < target) lo = mid + 1;
    else hi = mid - 1;
  }
  return -1;
}"#,
                    ),
                    (
                        "Python",
                        r#"def binary_search(nums: list[int], target: int) -> int:
    lo, hi = 0, len(nums) - 1

    while lo <= hi:
        mid = (lo + hi) // 2
        if nums[mid] == target:
            return mid
        if nums[mid] < target:
            lo = mid + 1
        else:
            hi = mid - 1

    return -1"#,
                    ),
                    (
                        "Java",
                        r#"public int binarySearch(int[] nums, int target) {
    int lo = 0, hi = nums.length - 1;

    while (lo <= hi) {
        int mid = lo + (hi - lo) / 2;
        if (nums[mid] == target) return mid;
        if (nums[mid] < target) lo = mid + 1;
        else hi = mid - 1;
    }
    return -1;
}"#,
                    ),
                ]))
                .explanation(
                    "The invariant is that the target, if present, lies in [lo, hi]. Each \
                     comparison discards half of that range. lo + (hi - lo) / 2 avoids integer \
                     overflow in fixed-width languages.",
                )
                .approach(
                    vec![
                        "Start with the whole array as the search range.",
                        "Compare the middle element with the target.",
                        "Discard the half that cannot contain the target.",
                        "Stop when found or when the range is empty.",
                    ],
                    "O(log n)",
                    "O(1)",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("First Bad Version", Difficulty::Easy)
                .description(
                    "Versions 1..n were released in order and every version after the first \
                     bad one is also bad. Given isBadVersion(v), find the first bad version \
                     with the fewest calls.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function firstBadVersion(n) {
  let lo = 1;
  let hi = n;

  while (lo < hi) {
    const mid = lo + Math.floor((hi - lo) / 2);
    if (isBadVersion(mid)) hi = mid;
    else lo = mid + 1;
  }
  return lo;
}"#,
                    ),
                    (
                        "Python",
                        r#"def first_bad_version(n: int) -> int:
    lo, hi = 1, n

    while lo < hi:
        mid = (lo + hi) // 2
        if is_bad_version(mid):
            hi = mid
        else:
            lo = mid + 1

    return lo"#,
                    ),
                ]))
                .explanation(
                    "This is binary search on a predicate that flips from false to true once. \
                     Keeping mid in the range when it is bad (hi = mid) converges on the first \
                     true position.",
                ),
        ),
    ]
}

fn practice() -> Vec<Block> {
    vec![
        Block::Paragraph("Apply the full UMPIRE loop to each of these before checking a solution."),
        Block::Problem(
            ProblemEntry::new("Two Sum", Difficulty::Easy)
                .description(
                    "Given an array of integers and a target, return the indices of the two \
                     numbers that add up to the target. Exactly one solution exists.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function twoSum(nums, target) {
  const seen = new Map();
  for (let i = 0; i < nums.length; i++) {
    const need = target - nums[i];
    if (seen.has(need)) return [seen.get(need), i];
    seen.set(nums[i], i);
  }
  return [];
}"#,
                    ),
                    (
                        "Python",
                        r#"def two_sum(nums: list[int], target: int) -> list[int]:
    seen = {}
    for i, x in enumerate(nums):
        if target - x in seen:
            return [seen[target - x], i]
        seen[x] = i
    return []"#,
                    ),
                    (
                        "Java",
                        r#"public int[] twoSum(int[] nums, int target) {
    Map<Integer, Integer> seen = new HashMap<>();
    for (int i = 0; i < nums.length; i++) {
        Integer j = seen.get(target - nums[i]);
        if (j != null) return new int[] { j, i };
        seen.put(nums[i], i);
    }
    return new int[0];
}"#,
                    ),
                ]))
                .explanation(
                    "Brute force checks every pair in O(n²). Storing each value's index in a \
                     hash map answers \"have I seen the complement?\" in O(1).",
                )
                .approach(
                    vec![
                        "Understand: indices, not values; exactly one answer.",
                        "Match: \"have I seen X before?\" suggests a hash map.",
                        "Plan: for each x, look up target - x, then store x.",
                        "Evaluate: one pass, O(n) time and space.",
                    ],
                    "O(n)",
                    "O(n)",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("Search Insert Position", Difficulty::Easy)
                .description(
                    "Given a sorted array of distinct integers and a target, return the index \
                     where the target is found or where it would be inserted.",
                )
                .code(CodeContent::single(
                    r#"def search_insert(nums: list[int], target: int) -> int:
    lo, hi = 0, len(nums)
    while lo < hi:
        mid = (lo + hi) // 2
        if nums[mid] < target:
            lo = mid + 1
        else:
            hi = mid
    return lo"#,
                ))
                .explanation(
                    "This is a lower-bound search: the first index whose value is not less than \
                     the target. The half-open range [lo, hi) makes the empty-array case \
                     return 0 naturally.",
                ),
        ),
    ]
}
