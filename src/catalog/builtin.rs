//! The catalog shipped with the binary.
//!
//! Snippets follow the module-code conventions of the framework's coding
//! standard. Entries marked negative show the mistake a rule catches.

use super::snippet::Snippet;

/// Built-in snippets in display order.
pub fn builtin_snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(
            "file-header",
            "Module files open with a namespace and their use statements.",
        )
        .with_body(&[
            r"namespace Drupal\example_module;",
            "",
            r"use Drupal\Core\Entity\EntityTypeManagerInterface;",
            r"use Drupal\node\Entity\Node;",
        ]),
        Snippet::new(
            "class-docblock",
            "This is the best way to write documents: Php-Classes and so on.",
        )
        .with_description(&[
            "Here follows a longer description.",
            "We have added some examples for you to see how it works.",
            "And what is possible with our Drupal Coding Standards.",
            "",
            r"@package Drupal\example_module",
        ])
        .with_body(&["class DrupalStandardsExampleClass {", "", "}"])
        .with_tags(&["full-stop-comment", "two-space-indent"]),
        Snippet::new("property-docblocks", "Every class property carries its own docblock.")
            .with_body(&[
                "class PropertyExample {",
                "",
                "  /**",
                "   * The comment of this private value.",
                "   *",
                r"   * @var \Drupal\Core\Entity\EntityTypeManagerInterface",
                "   */",
                "  private $privateValueA;",
                "",
                "  /**",
                "   * The comment of this other private value.",
                "   *",
                r"   * @var \Drupal\node\Entity\Node",
                "   */",
                "  private $privateValueB;",
                "",
                "}",
            ])
            .with_tags(&["two-space-indent", "no-mixed-case-variables"]),
        Snippet::new(
            "constructor",
            "This is the short comment of the constructor-function.",
        )
        .with_description(&[
            "And a longer description for this interesting comment.",
            "",
            r"@param \Drupal\Core\Entity\EntityTypeManagerInterface $valueA",
            "  This is the description of the value A.",
            r"@param \Drupal\node\Entity\Node $valueB",
            "  This is the description of the value B.",
        ])
        .with_body(&[
            "public function __construct(EntityTypeManagerInterface $valueA,",
            "                            Node $valueB) {",
            "  $this->privateValueA = $valueA;",
            "  $this->privateValueB = $valueB;",
            "}",
        ])
        .with_tags(&[
            "two-space-indent",
            "camel-case-methods",
            "no-mixed-case-variables",
        ]),
        Snippet::new("comment-stops", "Do you know the possible stops of a comment?")
            .with_description(&[
                "The possible stops for a short or longer comment are:",
                " - Point .",
                " - Question mark ?",
                " - Exclamation mark !",
                " - Closing brace )",
                "",
                "@param array $arrayVariableA",
                "  The array for variable a.",
                "@param array $arrayVariableB",
                "  Another array for variable b.",
                "",
                r"@return \Drupal\node\Entity\Node",
                "  The loaded node.",
            ])
            .with_body(&[
                "public function exampleFunctionA(array $arrayVariableA, array $arrayVariableB) {",
                "  $node_storage = $this->privateValueA->getStorage('node');",
                "  $nid = $this->privateValueB->id();",
                "",
                "  if (isset($arrayVariableA[$nid])) {",
                "    $nid++;",
                "  }",
                "  elseif (isset($arrayVariableB[$nid])) {",
                "    $nid--;",
                "  }",
                "",
                "  // Add an inline comment. With a full stop at the end.",
                "  $nodes = $node_storage->load($nid);",
                "",
                "  // And here some other comment:",
                "  return $nodes[$nid];",
                "}",
            ])
            .with_tags(&[
                "full-stop-comment",
                "two-space-indent",
                "no-mixed-case-variables",
                "camel-case-methods",
                "else-on-new-line",
            ]),
        Snippet::new("inherit-doc", "{@inheritdoc}")
            .with_body(&[
                "public function inheritFunction() {",
                "  // An inherit function does not need a full comment.",
                "}",
            ])
            .with_tags(&["full-stop-comment", "camel-case-methods"]),
        Snippet::new("true-false-null", "Shows how TRUE, FALSE and NULL are written.")
            .with_description(&["@param bool $value", "", "@return bool|null"])
            .with_body(&[
                "public function showSomeValues($value) {",
                "  // Here some examples for writing true|false|null:",
                "  if ($value === FALSE) {",
                "    return FALSE;",
                "  }",
                "  elseif ($value === NULL) {",
                "    return TRUE;",
                "  }",
                "  else {",
                "    return NULL;",
                "  }",
                "}",
            ])
            .with_tags(&[
                "uppercase-constants",
                "else-on-new-line",
                "full-stop-comment",
                "two-space-indent",
            ]),
        Snippet::new("ultra-short-comment", "If you want you can add an ultra short comment")
            .with_description(&["@return string"])
            .with_body(&[
                "public function ifYouWantYouCanAddAnUltraShortComment() {",
                "  $lorem = 'lorem';",
                "  return $lorem;",
                "}",
            ])
            .with_tags(&["camel-case-methods", "full-stop-comment"]),
        Snippet::new("ignore-block", "You want to add some messy code?")
            .with_body(&[
                "public function messyCodeExcludeFull() {",
                "  // @codingStandardsIgnoreStart",
                "",
                "    // Here we have a wrong indent, but it doesn't matter! 😎",
                "    $x = 'wrong indent';",
                "    $y = 'wrong indent';",
                "  // @codingStandardsIgnoreEnd",
                "}",
            ])
            .with_tags(&["two-space-indent", "balanced-ignore-markers"]),
        Snippet::new("ignore-lines", "And here again, some messy code.")
            .with_body(&[
                "public function messyCodeExcludeSingleLines() {",
                "  $lorem_ipsumDolores = 'camelcase is not allowed'; // @codingStandardsIgnoreLine",
                "",
                "  // @codingStandardsIgnoreLine",
                "  $lorem_ipsum_dolores = 'this variable is not used, gives a warning!';",
                "}",
            ])
            .with_tags(&["no-mixed-case-variables", "two-space-indent"]),
        Snippet::new("another-class", "Class AnotherExampleClass.")
            .with_description(&[r"@package Drupal\example_module"])
            .with_body(&[
                "class AnotherExampleClass {",
                "",
                "  /**",
                "   * Another example of another function.",
                "   */",
                "  public function loremIpsum() {",
                "    // Do nothing in this function.",
                "  }",
                "",
                "}",
            ])
            .with_tags(&[
                "full-stop-comment",
                "camel-case-methods",
                "two-space-indent",
            ]),
        Snippet::new("bad-comment-stop", "An inline comment needs a closing stop.")
            .with_body(&[
                "public function missingStop() {",
                "  // This comment does not use a full stop",
                "  return 1;",
                "}",
            ])
            .with_tags(&["full-stop-comment"])
            .negative(),
        Snippet::new("bad-indent", "Indentation may only grow after an opening brace.")
            .with_body(&[
                "public function wrongIndent() {",
                "  $x = 'right indent';",
                "    $y = 'wrong indent';",
                "}",
            ])
            .with_tags(&["two-space-indent"])
            .negative(),
        Snippet::new("bad-mixed-case-variable", "Variables never mix underscores and capitals.")
            .with_body(&["$lorem_ipsumDolores = 'camelcase is not allowed';"])
            .with_tags(&["no-mixed-case-variables"])
            .negative(),
        Snippet::new("bad-method-name", "Method names are lowerCamelCase.")
            .with_body(&["public function do_something_useful() {", "}"])
            .with_tags(&["camel-case-methods"])
            .negative(),
        Snippet::new("bad-lowercase-constants", "Lowercase constants are flagged.")
            .with_body(&[
                "if ($value === false) {",
                "  return null;",
                "}",
            ])
            .with_tags(&["uppercase-constants"])
            .negative(),
        Snippet::new("bad-else-placement", "An else never shares a line with the closing brace.")
            .with_body(&[
                "if ($value) {",
                "  $x = 1;",
                "} else {",
                "  $x = 2;",
                "}",
            ])
            .with_tags(&["else-on-new-line"])
            .negative(),
        Snippet::new("bad-unbalanced-ignore", "An ignore block must be closed.")
            .with_body(&[
                "// @codingStandardsIgnoreStart",
                "    $x = 'wrong indent';",
            ])
            .with_tags(&["balanced-ignore-markers"])
            .negative(),
    ]
}
