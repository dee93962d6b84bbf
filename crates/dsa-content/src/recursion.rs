//! Recursion page

use dsa_core::{sections, Block, Card, CodeContent, Difficulty, ProblemEntry};

sections! {
    /// Tabs of the Recursion page
    pub enum RecursionSection {
        Fundamentals => ("fundamentals", "📚 Fundamentals", fundamentals),
        CallStack => ("call-stack", "📦 Call Stack", call_stack),
        Patterns => ("patterns", "🧩 Patterns", patterns),
        BasicProblems => ("basic-problems", "✏️ Basic Problems", basic_problems),
        Backtracking => ("backtracking", "↩️ Backtracking", backtracking),
        Memoization => ("memoization", "🧠 Memoization", memoization),
    }
}

fn fundamentals() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "A recursive function solves a problem by calling itself on a smaller instance of \
             the same problem. It works when two things are true: there is a case small enough \
             to answer directly, and every call moves closer to it.",
        ),
        Block::Cards(vec![
            Card::new(
                "🛑",
                "Base case",
                "The input where the answer is known without further calls. Missing or \
                 unreachable base cases cause infinite recursion.",
            ),
            Card::new(
                "🔽",
                "Recursive case",
                "Shrink the input, call yourself, and combine the result. Trust that the \
                 smaller call is correct.",
            ),
            Card::new(
                "📈",
                "Progress",
                "Each call must strictly reduce some measure: a length, an index, a value.",
            ),
        ]),
        Block::Code {
            language: "javascript",
            code: r#"function factorial(n) {
  if (n <= 1) return 1;        // base case
  return n * factorial(n - 1); // recursive case
}"#,
        },
        Block::tip(
            "Write the base case first. Then write the recursive case as if the function \
             already worked for every smaller input.",
        ),
    ]
}

fn call_stack() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Every call pushes a frame holding its arguments and locals. The frame is popped \
             when the call returns. Recursion depth therefore costs memory: O(depth) stack \
             space even when the function allocates nothing.",
        ),
        Block::Code {
            language: "text",
            code: r#"factorial(4)
  └─ 4 * factorial(3)
         └─ 3 * factorial(2)
                └─ 2 * factorial(1)
                       └─ 1          ← base case, start unwinding
                = 2
         = 6
  = 24"#,
        },
        Block::table(
            vec!["Runtime", "Typical max depth", "Failure"],
            vec![
                vec!["Browser JavaScript", "~10,000 frames", "RangeError: Maximum call stack size exceeded"],
                vec!["CPython", "1,000 (sys.getrecursionlimit)", "RecursionError"],
                vec!["JVM", "Depends on -Xss", "StackOverflowError"],
            ],
        ),
        Block::warning(
            "Deep linear recursion (e.g. over a 100,000-node linked list) will overflow. \
             Convert it to a loop or use an explicit stack.",
        ),
    ]
}

fn patterns() -> Vec<Block> {
    vec![
        Block::Cards(vec![
            Card::new(
                "➖",
                "Linear",
                "One recursive call per frame: factorial, sum of a list, reversing a string.",
            ),
            Card::new(
                "🌿",
                "Tree (branching)",
                "Several calls per frame: Fibonacci, subsets, tree traversals. Cost grows with \
                 the branching factor.",
            ),
            Card::new(
                "✂️",
                "Divide and conquer",
                "Split into halves, solve each, merge: merge sort, quick sort, binary search.",
            ),
            Card::new(
                "🔙",
                "Backtracking",
                "Build a candidate step by step and undo a step when it cannot lead to a \
                 solution.",
            ),
        ]),
        Block::table(
            vec!["Pattern", "Calls per frame", "Typical time"],
            vec![
                vec!["Linear", "1", "O(n)"],
                vec!["Binary divide and conquer", "2 on halves", "O(n log n)"],
                vec!["Naive branching", "b", "O(b^depth)"],
                vec!["Memoized branching", "b", "O(states × b)"],
            ],
        ),
    ]
}

fn basic_problems() -> Vec<Block> {
    vec![
        Block::Problem(
            ProblemEntry::new("1. Sum of Digits", Difficulty::Easy)
                .description("Given a non-negative integer n, return the sum of its digits.")
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function sumDigits(n) {
  if (n < 10) return n;
  return (n % 10) + sumDigits(Math.floor(n / 10));
}"#,
                    ),
                    (
                        "Python",
                        r#"def sum_digits(n: int) -> int:
    if n < 10:
        return n
    return n % 10 + sum_digits(n // 10)"#,
                    ),
                    (
                        "Java",
                        r#"public int sumDigits(int n) {
    if (n < 10) return n;
    return n % 10 + sumDigits(n / 10);
}"#,
                    ),
                ]))
                .explanation(
                    "The last digit is n % 10 and the rest of the number is n / 10. A single \
                     digit is its own sum.",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("2. Power Function", Difficulty::Medium)
                .description("Compute x raised to the power n (n may be negative) in O(log n).")
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function myPow(x, n) {
  if (n === 0) return 1;
  if (n < 0) return 1 / myPow(x, -n);

  const half = myPow(x, Math.floor(n / 2));
  return n % 2 === 0 ? half * half : half * half * x;
}"#,
                    ),
                    (
                        "Python",
                        r#"def my_pow(x: float, n: int) -> float:
    if n == 0:
        return 1.0
    if n < 0:
        return 1 / my_pow(x, -n)

    half = my_pow(x, n // 2)
    return half * half if n % 2 == 0 else half * half * x"#,
                    ),
                ]))
                .explanation(
                    "x^n = (x^(n/2))². Computing the half once and squaring it halves the \
                     exponent on every call.",
                )
                .approach(
                    vec![
                        "Return 1 when n is 0.",
                        "Handle negative n by inverting the positive result.",
                        "Recurse on n / 2 and square the result.",
                        "Multiply by x once more when n is odd.",
                    ],
                    "O(log n)",
                    "O(log n) call stack",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("3. Reverse a String", Difficulty::Easy)
                .description("Reverse a string using recursion only, no loops.")
                .code(CodeContent::single(
                    r#"function reverse(s) {
  if (s.length <= 1) return s;
  return reverse(s.slice(1)) + s[0];
}"#,
                ))
                .explanation(
                    "The reverse of s is the reverse of everything after the first character, \
                     followed by the first character. Slicing makes this O(n²); pass indices \
                     to avoid the copies.",
                ),
        ),
    ]
}

fn backtracking() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Backtracking explores a decision tree depth-first. At each level choose an option, \
             recurse, then undo the choice so the next option starts from a clean state.",
        ),
        Block::Code {
            language: "text",
            code: r#"backtrack(state):
    if state is a complete solution:
        record it
        return
    for choice in options(state):
        apply choice
        backtrack(state)
        undo choice"#,
        },
        Block::Problem(
            ProblemEntry::new("Generate All Subsets", Difficulty::Medium)
                .description(
                    "Given an array of distinct integers, return every possible subset. The \
                     order of subsets does not matter.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function subsets(nums) {
  const result = [];
  const current = [];

  function backtrack(start) {
    result.push([...current]);
    for (let i = start; i < nums.length; i++) {
      current.push(nums[i]);
      backtrack(i + 1);
      current.pop();
    }
  }

  backtrack(0);
  return result;
}"#,
                    ),
                    (
                        "Python",
                        r#"def subsets(nums: list[int]) -> list[list[int]]:
    result, current = [], []

    def backtrack(start: int) -> None:
        result.append(current[:])
        for i in range(start, len(nums)):
            current.append(nums[i])
            backtrack(i + 1)
            current.pop()

    backtrack(0)
    return result"#,
                    ),
                    (
                        "Java",
                        r#"public List<List<Integer>> subsets(int[] nums) {
    List<List<Integer>> result = new ArrayList<>();
    backtrack(nums, 0, new ArrayList<>(), result);
    return result;
}

private void backtrack(int[] nums, int start, List<Integer> current,
                       List<List<Integer>> result) {
    result.add(new ArrayList<>(current));
    for (int i = start; i < nums.length; i++) {
        current.add(nums[i]);
        backtrack(nums, i + 1, current, result);
        current.remove(current.size() - 1);
    }
}"#,
                    ),
                ]))
                .explanation(
                    "Every node of the decision tree is a valid subset, so it is recorded on \
                     entry. Starting the loop at `start` prevents the same set from being \
                     generated in a different order.",
                )
                .approach(
                    vec![
                        "Record the current subset.",
                        "For each remaining index, add that element.",
                        "Recurse with the next start index.",
                        "Remove the element before trying the next one.",
                    ],
                    "O(n · 2ⁿ)",
                    "O(n) recursion depth",
                ),
        ),
    ]
}

fn memoization() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Branching recursion often solves the same subproblem many times. Memoization \
             caches each result the first time it is computed, turning exponential trees into \
             linear work over distinct states.",
        ),
        Block::Problem(
            ProblemEntry::new("Climbing Stairs", Difficulty::Easy)
                .description(
                    "You can climb 1 or 2 steps at a time. In how many distinct ways can you \
                     reach the top of a staircase with n steps?",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function climbStairs(n, memo = new Map()) {
  if (n <= 2) return n;
  if (memo.has(n)) return memo.get(n);

  const ways = climbStairs(n - 1, memo) + climbStairs(n - 2, memo);
  memo.set(n, ways);
  return ways;
}"#,
                    ),
                    (
                        "Python",
                        r#"from functools import cache

@cache
def climb_stairs(n: int) -> int:
    if n <= 2:
        return n
    return climb_stairs(n - 1) + climb_stairs(n - 2)"#,
                    ),
                ]))
                .explanation(
                    "The last move is either a 1-step or a 2-step, so ways(n) = ways(n-1) + \
                     ways(n-2). Without the cache this is the Fibonacci tree with O(2ⁿ) calls.",
                )
                .approach(
                    vec![
                        "Define ways(n) in terms of ways(n - 1) and ways(n - 2).",
                        "Answer n ≤ 2 directly.",
                        "Check the cache before recursing.",
                        "Store each result before returning it.",
                    ],
                    "O(n)",
                    "O(n)",
                ),
        ),
        Block::tip(
            "Once a memoized solution works, the same recurrence can usually be filled \
             bottom-up in a loop, which removes the call-stack cost.",
        ),
    ]
}
