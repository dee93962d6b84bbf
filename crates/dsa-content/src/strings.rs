//! Strings page

use dsa_core::{sections, Block, Card, CodeContent, Difficulty, ProblemEntry};

sections! {
    /// Tabs of the Strings page
    pub enum StringsSection {
        Fundamentals => ("fundamentals", "📚 Fundamentals", fundamentals),
        BasicProblems => ("basic-problems", "🔤 Basic Problems", basic_problems),
        TwoPointers => ("two-pointers", "👉 Two Pointers", two_pointers),
        SlidingWindow => ("sliding-window", "🪟 Sliding Window", sliding_window),
        PatternMatching => ("pattern-matching", "🧩 Pattern Matching", pattern_matching),
        Practice => ("practice", "🏋️ Practice", practice),
    }
}

fn fundamentals() -> Vec<Block> {
    vec![
        Block::Heading("What is a string?"),
        Block::Paragraph(
            "A string is an ordered sequence of characters. Most languages store it as a \
             contiguous array, so indexing is O(1) while searching is O(n). In JavaScript, \
             Java and Python strings are immutable: every \"modification\" allocates a new string.",
        ),
        Block::Cards(vec![
            Card::new(
                "🔒",
                "Immutability",
                "Concatenating inside a loop is O(n²). Collect pieces in an array or a \
                 StringBuilder and join once.",
            ),
            Card::new(
                "🔢",
                "Character codes",
                "Characters map to numbers. 'a'..'z' are contiguous, so c - 'a' gives an index \
                 into a 26-slot frequency array.",
            ),
            Card::new(
                "🧮",
                "Frequency maps",
                "Counting characters turns many comparisons (anagrams, permutations) into \
                 comparing two small tables.",
            ),
        ]),
        Block::table(
            vec!["Operation", "JavaScript", "Python", "Java", "Cost"],
            vec![
                vec!["Length", "s.length", "len(s)", "s.length()", "O(1)"],
                vec!["Char at i", "s[i]", "s[i]", "s.charAt(i)", "O(1)"],
                vec!["Substring", "s.slice(i, j)", "s[i:j]", "s.substring(i, j)", "O(j - i)"],
                vec!["Find", "s.indexOf(t)", "s.find(t)", "s.indexOf(t)", "O(n·m)"],
                vec!["Reverse", "[...s].reverse().join('')", "s[::-1]", "new StringBuilder(s).reverse()", "O(n)"],
            ],
        ),
        Block::tip(
            "When a problem says \"ignore case and non-alphanumeric characters\", normalise \
             once up front or skip characters lazily with two pointers. Do not do both.",
        ),
    ]
}

fn basic_problems() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Warm-up problems that exercise indexing, normalisation and counting. Try each one \
             before revealing the solution.",
        ),
        Block::Problem(
            ProblemEntry::new("1. Palindrome Check", Difficulty::Easy)
                .description(
                    "Given a string s, return true if it reads the same forward and backward \
                     after converting to lowercase and removing all non-alphanumeric characters.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function isPalindrome(s) {
  let left = 0;
  let right = s.length - 1;

  while (left < right) {
    while (left < right && !isAlphaNum(s[left])) left++;
    while (left < right && !isAlphaNum(s[right])) right--;

    if (s[left].toLowerCase() !== s[right].toLowerCase()) {
      return false;
    }
    left++;
    right--;
  }
  return true;
}

function isAlphaNum(c) {
  return /[a-z0-9]/i.test(c);
}"#,
                    ),
                    (
                        "Python",
                        r#"def is_palindrome(s: str) -> bool:
    left, right = 0, len(s) - 1

    while left < right:
        while left < right and not s[left].isalnum():
            left += 1
        while left < right and not s[right].isalnum():
            right -= 1

        if s[left].lower() != s[right].lower():
            return False
        left += 1
        right -= 1

    return True"#,
                    ),
                    (
                        "Java",
                        r#"public boolean isPalindrome(String s) {
    int left = 0;
    int right = s.length() - 1;

    while (left < right) {
        while (left < right && !Character.isLetterOrDigit(s.charAt(left))) left++;
        while (left < right && !Character.isLetterOrDigit(s.charAt(right))) right--;

        if (Character.toLowerCase(s.charAt(left))
                != Character.toLowerCase(s.charAt(right))) {
            return false;
        }
        left++;
        right--;
    }
    return true;
}"#,
                    ),
                ]))
                .explanation(
                    "Two pointers walk inward from both ends, skipping characters that are not \
                     letters or digits. The first mismatch proves the string is not a \
                     palindrome; meeting in the middle proves it is.",
                )
                .approach(
                    vec![
                        "Place one pointer at the start and one at the end.",
                        "Skip non-alphanumeric characters on each side.",
                        "Compare the two characters case-insensitively.",
                        "Move both pointers inward and repeat until they meet.",
                    ],
                    "O(n)",
                    "O(1)",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("2. Reverse Words", Difficulty::Easy)
                .description(
                    "Reverse the order of words in a string. Words are separated by one or more \
                     spaces; the result must use single spaces and no leading or trailing space.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function reverseWords(s) {
  return s.trim().split(/\s+/).reverse().join(' ');
}"#,
                    ),
                    (
                        "Python",
                        r#"def reverse_words(s: str) -> str:
    return " ".join(reversed(s.split()))"#,
                    ),
                    (
                        "Java",
                        r#"public String reverseWords(String s) {
    String[] words = s.trim().split("\\s+");
    StringBuilder sb = new StringBuilder();
    for (int i = words.length - 1; i >= 0; i--) {
        sb.append(words[i]);
        if (i > 0) sb.append(' ');
    }
    return sb.toString();
}"#,
                    ),
                ]))
                .explanation(
                    "Splitting on runs of whitespace drops the empty tokens, so reversing the \
                     token list and joining with a single space produces a normalised result.",
                ),
        ),
        Block::Problem(
            ProblemEntry::new("3. Valid Anagram", Difficulty::Easy)
                .description(
                    "Given two strings s and t, return true if t is an anagram of s. Both \
                     strings contain only lowercase English letters.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function isAnagram(s, t) {
  if (s.length !== t.length) return false;

  const counts = new Array(26).fill(0);
  for (let i = 0; i < s.length; i++) {
    counts[s.charCodeAt(i) - 97]++;
    counts[t.charCodeAt(i) - 97]--;
  }
  return counts.every((c) => c === 0);
}"#,
                    ),
                    (
                        "Python",
                        r#"from collections import Counter

def is_anagram(s: str, t: str) -> bool:
    return len(s) == len(t) and Counter(s) == Counter(t)"#,
                    ),
                ]))
                .explanation(
                    "Anagrams have identical character counts. One pass increments for s and \
                     decrements for t; every slot must end at zero.",
                )
                .approach(
                    vec![
                        "Reject strings of different length immediately.",
                        "Keep a 26-slot count array.",
                        "Increment for s, decrement for t in the same loop.",
                        "Return whether every count is zero.",
                    ],
                    "O(n)",
                    "O(1) — the alphabet is fixed",
                ),
        ),
    ]
}

fn two_pointers() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Two pointers replace a nested loop when the answer depends on a pair of \
             positions that move monotonically. On strings the pointers usually start at \
             opposite ends, or one reads while the other writes.",
        ),
        Block::steps(
            "Recognising the pattern",
            vec![
                "The input is a sequence you can scan from both ends.",
                "A local decision tells you which pointer to move.",
                "Moving a pointer never needs to be undone.",
            ],
        ),
        Block::Problem(
            ProblemEntry::new("Reverse Vowels of a String", Difficulty::Easy)
                .description(
                    "Reverse only the vowels of a string and return it. Vowels are a, e, i, o, u \
                     in either case.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function reverseVowels(s) {
  const vowels = new Set('aeiouAEIOU');
  const chars = [...s];
  let i = 0;
  let j = chars.length - 1;

  while (i < j) {
    if (!vowels.has(chars[i])) { i++; continue; }
    if (!vowels.has(chars[j])) { j--; continue; }
    [chars[i], chars[j]] = [chars[j], chars[i]];
    i++;
    j--;
  }
  return chars.join('');
}"#,
                    ),
                    (
                        "Python",
                        r#"def reverse_vowels(s: str) -> str:
    vowels = set("aeiouAEIOU")
    chars = list(s)
    i, j = 0, len(chars) - 1

    while i < j:
        if chars[i] not in vowels:
            i += 1
        elif chars[j] not in vowels:
            j -= 1
        else:
            chars[i], chars[j] = chars[j], chars[i]
            i += 1
            j -= 1

    return "".join(chars)"#,
                    ),
                ]))
                .explanation(
                    "Strings are immutable, so copy into a character array first. Each pointer \
                     stops on a vowel; when both have stopped, swap and advance both.",
                )
                .approach(
                    vec![
                        "Convert the string to a mutable array.",
                        "Advance the left pointer until it sits on a vowel.",
                        "Retreat the right pointer until it sits on a vowel.",
                        "Swap, move both pointers, and repeat.",
                    ],
                    "O(n)",
                    "O(n) for the character array",
                ),
        ),
    ]
}

fn sliding_window() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "A sliding window keeps a contiguous range [left, right] and a summary of what is \
             inside it. The right edge always grows; the left edge shrinks only when the \
             window breaks the rule.",
        ),
        Block::Code {
            language: "text",
            code: r#"left = 0
for right in 0..n:
    add s[right] to window
    while window is invalid:
        remove s[left] from window
        left += 1
    record answer for [left, right]"#,
        },
        Block::Problem(
            ProblemEntry::new(
                "Longest Substring Without Repeating Characters",
                Difficulty::Medium,
            )
            .description(
                "Given a string s, find the length of the longest substring that contains no \
                 repeated characters.",
            )
            .code(CodeContent::multi([
                (
                    "JavaScript",
                    r#"function lengthOfLongestSubstring(s) {
  const lastSeen = new Map();
  let left = 0;
  let best = 0;

  for (let right = 0; right < s.length; right++) {
    const c = s[right];
    if (lastSeen.has(c) && lastSeen.get(c) >= left) {
      left = lastSeen.get(c) + 1;
    }
    lastSeen.set(c, right);
    best = Math.max(best, right - left + 1);
  }
  return best;
}"#,
                ),
                (
                    "Python",
                    r#"def length_of_longest_substring(s: str) -> int:
    last_seen = {}
    left = best = 0

    for right, c in enumerate(s):
        if last_seen.get(c, -1) >= left:
            left = last_seen[c] + 1
        last_seen[c] = right
        best = max(best, right - left + 1)

    return best"#,
                ),
                (
                    "Java",
                    r#"public int lengthOfLongestSubstring(String s) {
    Map<Character, Integer> lastSeen = new HashMap<>();
    int left = 0, best = 0;

    for (int right = 0; right < s.length(); right++) {
        char c = s.charAt(right);
        if (lastSeen.containsKey(c) && lastSeen.get(c) >= left) {
            left = lastSeen.get(c) + 1;
        }
        lastSeen.put(c, right);
        best = Math.max(best, right - left + 1);
    }
    return best;
}"#,
                ),
            ]))
            .explanation(
                "Remembering the last index of each character lets the left edge jump past a \
                 duplicate in one step instead of shrinking one character at a time.",
            )
            .approach(
                vec![
                    "Grow the window one character at a time.",
                    "If the new character was last seen inside the window, jump left past it.",
                    "Record the character's latest index.",
                    "Track the widest window seen so far.",
                ],
                "O(n)",
                "O(min(n, alphabet))",
            ),
        ),
    ]
}

fn pattern_matching() -> Vec<Block> {
    vec![
        Block::Paragraph(
            "Naive search compares the pattern at every offset and can re-read the same text \
             characters many times. Knuth-Morris-Pratt (KMP) precomputes how far the pattern \
             can shift after a mismatch, so the text pointer never moves backwards.",
        ),
        Block::titled_bullets(
            "The LPS table",
            vec![
                "lps[i] is the length of the longest proper prefix of pattern[0..=i] that is also a suffix.",
                "On a mismatch at pattern index j, continue from j = lps[j - 1] instead of 0.",
                "Building the table is itself a KMP run of the pattern against itself.",
            ],
        ),
        Block::table(
            vec!["Algorithm", "Preprocessing", "Search", "Notes"],
            vec![
                vec!["Naive", "—", "O(n·m)", "Fine for short patterns"],
                vec!["KMP", "O(m)", "O(n)", "Never re-reads text"],
                vec!["Rabin-Karp", "O(m)", "O(n) expected", "Rolling hash; good for many patterns"],
                vec!["Z-algorithm", "O(n + m)", "O(n + m)", "Z-array of pattern + '$' + text"],
            ],
        ),
        Block::Problem(
            ProblemEntry::new("Find the First Occurrence (KMP)", Difficulty::Hard)
                .description(
                    "Return the index of the first occurrence of needle in haystack, or -1 if \
                     needle is not part of haystack. Achieve O(n + m) time.",
                )
                .code(CodeContent::multi([
                    (
                        "JavaScript",
                        r#"function strStr(haystack, needle) {
  if (needle.length === 0) return 0;
  const lps = buildLps(needle);

  let j = 0;
  for (let i = 0; i < haystack.length; i++) {
    while (j > 0 && haystack[i] !== needle[j]) j = lps[j - 1];
    if (haystack[i] === needle[j]) j++;
    if (j === needle.length) return i - j + 1;
  }
  return -1;
}

function buildLps(p) {
  const lps = new Array(p.length).fill(0);
  let len = 0;
  for (let i = 1; i < p.length; i++) {
    while (len > 0 && p[i] !== p[len]) len = lps[len - 1];
    if (p[i] === p[len]) len++;
    lps[i] = len;
  }
  return lps;
}"#,
                    ),
                    (
                        "Python",
                        r#"def str_str(haystack: str, needle: str) -> int:
    if not needle:
        return 0

    lps = [0] * len(needle)
    length = 0
    for i in range(1, len(needle)):
        while length and needle[i] != needle[length]:
            length = lps[length - 1]
        if needle[i] == needle[length]:
            length += 1
        lps[i] = length

    j = 0
    for i, c in enumerate(haystack):
        while j and c != needle[j]:
            j = lps[j - 1]
        if c == needle[j]:
            j += 1
        if j == len(needle):
            return i - j + 1
    return -1"#,
                    ),
                    (
                        "Java",
                        r#"public int strStr(String haystack, String needle) {
    if (needle.isEmpty()) return 0;
    int[] lps = new int[needle.length()];
    for (int i = 1, len = 0; i < needle.length(); i++) {
        while (len > 0 && needle.charAt(i) != needle.charAt(len)) len = lps[len - 1];
        if (needle.charAt(i) == needle.charAt(len)) len++;
        lps[i] = len;
    }

    for (int i = 0, j = 0; i < haystack.length(); i++) {
        while (j > 0 && haystack.charAt(i) != needle.charAt(j)) j = lps[j - 1];
        if (haystack.charAt(i) == needle.charAt(j)) j++;
        if (j == needle.length()) return i - j + 1;
    }
    return -1;
}"#,
                    ),
                ]))
                .explanation(
                    "The text index i only ever increases. Each fallback through the LPS table \
                     undoes at most as many matches as were previously made, so the total work \
                     is linear in the combined length.",
                )
                .approach(
                    vec![
                        "Build the LPS table for the pattern.",
                        "Scan the text once with a pattern index j.",
                        "On mismatch, fall back with j = lps[j - 1] until a match or j = 0.",
                        "When j reaches the pattern length, report the start index.",
                    ],
                    "O(n + m)",
                    "O(m)",
                ),
        ),
    ]
}

fn practice() -> Vec<Block> {
    vec![
        Block::Paragraph("More problems to cement each pattern, roughly in order of difficulty."),
        Block::table(
            vec!["Problem", "Pattern", "Difficulty"],
            vec![
                vec!["Longest Common Prefix", "Vertical scan", "Easy"],
                vec!["Valid Parentheses", "Stack", "Easy"],
                vec!["Group Anagrams", "Frequency key", "Medium"],
                vec!["Minimum Window Substring", "Sliding window", "Hard"],
                vec!["Repeated Substring Pattern", "KMP / LPS", "Easy"],
            ],
        ),
        Block::Problem(
            ProblemEntry::new("Longest Common Prefix", Difficulty::Easy)
                .description(
                    "Return the longest common prefix shared by every string in an array, or an \
                     empty string if there is none.",
                )
                .code(CodeContent::single(
                    r#"function longestCommonPrefix(strs) {
  if (strs.length === 0) return '';

  for (let i = 0; i < strs[0].length; i++) {
    const c = strs[0][i];
    for (let k = 1; k < strs.length; k++) {
      if (i === strs[k].length || strs[k][i] !== c) {
        return strs[0].slice(0, i);
      }
    }
  }
  return strs[0];
}"#,
                ))
                .explanation(
                    "Scan column by column using the first string as the reference. The first \
                     column where any string ends or differs marks the end of the prefix.",
                ),
        ),
        Block::warning(
            "Minimum Window Substring needs two frequency maps and a counter of satisfied \
             characters; shrinking the window without that counter makes it O(n·k).",
        ),
    ]
}
