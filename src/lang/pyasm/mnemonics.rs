//! Instruction names that can appear in a disassembly listing.
//!
//! The table is the union of operator names over the interpreter versions that
//! disassemblers commonly target, including the 1.x/2.x slice opcodes, the 3.11+
//! specialized and instrumented forms, and a few PyPy extensions.
//! The set is built on first use and never changes afterward.

use std::collections::HashSet;
use std::sync::OnceLock;

pub const MNEMONICS: &[&str] = &[
    // carried over from the earliest versions
    "STOP_CODE", "SET_LINENO", "RESERVE_FAST", "LOAD_LOCAL", "LOAD_GLOBALS",
    "UNPACK_TUPLE", "UNPACK_LIST", "UNPACK_ARG", "UNPACK_VARARG", "BUILD_FUNCTION",
    "RAISE_EXCEPTION", "ACCESS_MODE", "JUMP_IF_FALSE", "JUMP_IF_TRUE",
    // stack manipulation
    "POP_TOP", "ROT_TWO", "ROT_THREE", "ROT_FOUR", "ROT_N", "DUP_TOP", "DUP_TOPX",
    "DUP_TOP_TWO", "COPY", "SWAP", "NOP", "PUSH_NULL", "CACHE", "EXTENDED_ARG",
    "EXTENDED_ARG_QUICK", "RESUME", "RESUME_QUICK", "RESUME_CHECK", "INTERPRETER_EXIT",
    "NOT_TAKEN", "POP_ITER", "RESERVED",
    // unary and binary arithmetic
    "UNARY_POSITIVE", "UNARY_NEGATIVE", "UNARY_NOT", "UNARY_CONVERT", "UNARY_INVERT",
    "BINARY_POWER", "BINARY_MULTIPLY", "BINARY_MATRIX_MULTIPLY", "BINARY_DIVIDE",
    "BINARY_MODULO", "BINARY_ADD", "BINARY_SUBTRACT", "BINARY_SUBSCR",
    "BINARY_FLOOR_DIVIDE", "BINARY_TRUE_DIVIDE", "BINARY_LSHIFT", "BINARY_RSHIFT",
    "BINARY_AND", "BINARY_XOR", "BINARY_OR", "BINARY_OP", "BINARY_SLICE",
    "INPLACE_FLOOR_DIVIDE", "INPLACE_TRUE_DIVIDE", "INPLACE_ADD", "INPLACE_SUBTRACT",
    "INPLACE_MULTIPLY", "INPLACE_MATRIX_MULTIPLY", "INPLACE_DIVIDE", "INPLACE_MODULO",
    "INPLACE_POWER", "INPLACE_LSHIFT", "INPLACE_RSHIFT", "INPLACE_AND", "INPLACE_XOR",
    "INPLACE_OR", "TO_BOOL",
    // legacy slicing, written with the operand folded into the name
    "SLICE+0", "SLICE+1", "SLICE+2", "SLICE+3",
    "STORE_SLICE+0", "STORE_SLICE+1", "STORE_SLICE+2", "STORE_SLICE+3",
    "DELETE_SLICE+0", "DELETE_SLICE+1", "DELETE_SLICE+2", "DELETE_SLICE+3",
    "STORE_SLICE", "BUILD_SLICE",
    // subscripts, attributes, names
    "STORE_SUBSCR", "DELETE_SUBSCR", "STORE_MAP", "STORE_NAME", "DELETE_NAME",
    "STORE_ATTR", "DELETE_ATTR", "STORE_GLOBAL", "DELETE_GLOBAL", "LOAD_CONST",
    "LOAD_NAME", "LOAD_ATTR", "LOAD_GLOBAL", "LOAD_FAST", "STORE_FAST", "DELETE_FAST",
    "LOAD_CLOSURE", "LOAD_DEREF", "STORE_DEREF", "DELETE_DEREF", "LOAD_CLASSDEREF",
    "LOAD_LOCALS", "STORE_LOCALS", "LOAD_METHOD", "LOAD_SUPER_ATTR", "LOAD_SUPER_METHOD",
    "LOAD_ZERO_SUPER_ATTR", "LOAD_ZERO_SUPER_METHOD", "LOAD_FAST_CHECK",
    "LOAD_FAST_AND_CLEAR", "LOAD_FAST_LOAD_FAST", "LOAD_FAST_BORROW",
    "LOAD_FAST_BORROW_LOAD_FAST_BORROW", "STORE_FAST_LOAD_FAST", "STORE_FAST_STORE_FAST",
    "STORE_FAST_MAYBE_NULL", "LOAD_FROM_DICT_OR_GLOBALS", "LOAD_FROM_DICT_OR_DEREF",
    "LOAD_ASSERTION_ERROR", "LOAD_BUILD_CLASS", "LOAD_SMALL_INT", "LOAD_COMMON_CONSTANT",
    "LOAD_SPECIAL", "MAKE_CELL", "COPY_FREE_VARS", "SETUP_ANNOTATIONS",
    // printing and statements
    "PRINT_EXPR", "PRINT_ITEM", "PRINT_NEWLINE", "PRINT_ITEM_TO", "PRINT_NEWLINE_TO",
    "EXEC_STMT", "IMPORT_STAR", "IMPORT_NAME", "IMPORT_FROM", "BUILD_CLASS",
    // containers
    "BUILD_TUPLE", "BUILD_LIST", "BUILD_SET", "BUILD_MAP", "BUILD_STRING",
    "BUILD_CONST_KEY_MAP", "BUILD_LIST_UNPACK", "BUILD_MAP_UNPACK",
    "BUILD_MAP_UNPACK_WITH_CALL", "BUILD_TUPLE_UNPACK", "BUILD_TUPLE_UNPACK_WITH_CALL",
    "BUILD_SET_UNPACK", "BUILD_LIST_FROM_ARG", "LIST_APPEND", "SET_ADD", "MAP_ADD",
    "LIST_EXTEND", "SET_UPDATE", "DICT_MERGE", "DICT_UPDATE", "LIST_TO_TUPLE",
    "UNPACK_SEQUENCE", "UNPACK_EX", "GET_LEN",
    // comparisons
    "COMPARE_OP", "IS_OP", "CONTAINS_OP", "CHECK_EXC_MATCH", "CHECK_EG_MATCH",
    // control flow
    "JUMP_FORWARD", "JUMP_ABSOLUTE", "JUMP_BACKWARD", "JUMP_BACKWARD_NO_INTERRUPT",
    "JUMP_BACKWARD_QUICK", "JUMP", "JUMP_NO_INTERRUPT", "JUMP_IF_FALSE_OR_POP",
    "JUMP_IF_TRUE_OR_POP", "JUMP_IF_NOT_EXC_MATCH", "POP_JUMP_IF_FALSE",
    "POP_JUMP_IF_TRUE", "POP_JUMP_IF_NONE", "POP_JUMP_IF_NOT_NONE",
    "POP_JUMP_FORWARD_IF_FALSE", "POP_JUMP_FORWARD_IF_TRUE", "POP_JUMP_FORWARD_IF_NONE",
    "POP_JUMP_FORWARD_IF_NOT_NONE", "POP_JUMP_BACKWARD_IF_FALSE",
    "POP_JUMP_BACKWARD_IF_TRUE", "POP_JUMP_BACKWARD_IF_NONE",
    "POP_JUMP_BACKWARD_IF_NOT_NONE", "FOR_ITER", "END_FOR", "GET_ITER", "GET_YIELD_FROM_ITER",
    "BREAK_LOOP", "CONTINUE_LOOP", "RETURN_VALUE", "RETURN_CONST", "YIELD_VALUE",
    "YIELD_FROM", "RETURN_GENERATOR", "GEN_START", "SEND", "END_SEND", "CLEANUP_THROW",
    "JUMP_IF_NOT_DEBUG",
    // blocks and exceptions
    "SETUP_LOOP", "SETUP_EXCEPT", "SETUP_FINALLY", "SETUP_WITH", "SETUP_ASYNC_WITH",
    "SETUP_CLEANUP", "POP_BLOCK", "POP_EXCEPT", "END_FINALLY", "BEGIN_FINALLY",
    "CALL_FINALLY", "POP_FINALLY", "WITH_CLEANUP", "WITH_CLEANUP_START",
    "WITH_CLEANUP_FINISH", "WITH_EXCEPT_START", "BEFORE_WITH", "RAISE_VARARGS", "RERAISE",
    "PUSH_EXC_INFO", "PREP_RERAISE_STAR",
    // async
    "GET_AITER", "GET_ANEXT", "GET_AWAITABLE", "BEFORE_ASYNC_WITH", "END_ASYNC_FOR",
    "ASYNC_GEN_WRAP",
    // calls and functions
    "CALL_FUNCTION", "CALL_FUNCTION_VAR", "CALL_FUNCTION_KW", "CALL_FUNCTION_VAR_KW",
    "CALL_FUNCTION_EX", "CALL_METHOD", "CALL", "CALL_KW", "PRECALL", "KW_NAMES",
    "CALL_INTRINSIC_1", "CALL_INTRINSIC_2", "MAKE_FUNCTION", "MAKE_CLOSURE",
    "SET_FUNCTION_ATTRIBUTE", "LOOKUP_METHOD", "EXIT_INIT_CHECK", "ENTER_EXECUTOR",
    // formatting
    "FORMAT_VALUE", "FORMAT_SIMPLE", "FORMAT_WITH_SPEC", "CONVERT_VALUE",
    // structural pattern matching
    "MATCH_MAPPING", "MATCH_SEQUENCE", "MATCH_KEYS", "MATCH_CLASS",
    "COPY_DICT_WITHOUT_KEYS",
    // specialized forms
    "BINARY_OP_ADAPTIVE", "BINARY_OP_ADD_INT", "BINARY_OP_ADD_FLOAT",
    "BINARY_OP_ADD_UNICODE", "BINARY_OP_INPLACE_ADD_UNICODE", "BINARY_OP_MULTIPLY_FLOAT",
    "BINARY_OP_MULTIPLY_INT", "BINARY_OP_SUBTRACT_FLOAT", "BINARY_OP_SUBTRACT_INT",
    "BINARY_SUBSCR_ADAPTIVE", "BINARY_SUBSCR_DICT", "BINARY_SUBSCR_GETITEM",
    "BINARY_SUBSCR_LIST_INT", "BINARY_SUBSCR_TUPLE_INT", "CALL_ADAPTIVE",
    "CALL_PY_EXACT_ARGS", "CALL_PY_WITH_DEFAULTS", "COMPARE_OP_ADAPTIVE",
    "COMPARE_OP_FLOAT_JUMP", "COMPARE_OP_INT_JUMP", "COMPARE_OP_STR_JUMP",
    "LOAD_ATTR_ADAPTIVE", "LOAD_ATTR_INSTANCE_VALUE", "LOAD_ATTR_MODULE", "LOAD_ATTR_SLOT",
    "LOAD_ATTR_WITH_HINT", "LOAD_CONST__LOAD_FAST", "LOAD_FAST__LOAD_CONST",
    "LOAD_FAST__LOAD_FAST", "LOAD_GLOBAL_ADAPTIVE", "LOAD_GLOBAL_BUILTIN",
    "LOAD_GLOBAL_MODULE", "LOAD_METHOD_ADAPTIVE", "LOAD_METHOD_CLASS", "LOAD_METHOD_MODULE",
    "LOAD_METHOD_NO_DICT", "LOAD_METHOD_WITH_DICT", "LOAD_METHOD_WITH_VALUES",
    "PRECALL_ADAPTIVE", "PRECALL_BOUND_METHOD", "PRECALL_BUILTIN_CLASS",
    "PRECALL_BUILTIN_FAST_WITH_KEYWORDS", "PRECALL_METHOD_DESCRIPTOR_FAST_WITH_KEYWORDS",
    "PRECALL_NO_KW_BUILTIN_FAST", "PRECALL_NO_KW_BUILTIN_O", "PRECALL_NO_KW_ISINSTANCE",
    "PRECALL_NO_KW_LEN", "PRECALL_NO_KW_LIST_APPEND", "PRECALL_NO_KW_METHOD_DESCRIPTOR_FAST",
    "PRECALL_NO_KW_METHOD_DESCRIPTOR_NOARGS", "PRECALL_NO_KW_METHOD_DESCRIPTOR_O",
    "PRECALL_NO_KW_STR_1", "PRECALL_NO_KW_TUPLE_1", "PRECALL_NO_KW_TYPE_1",
    "PRECALL_PYFUNC", "STORE_ATTR_ADAPTIVE", "STORE_ATTR_INSTANCE_VALUE", "STORE_ATTR_SLOT",
    "STORE_ATTR_WITH_HINT", "STORE_FAST__LOAD_FAST", "STORE_FAST__STORE_FAST",
    "STORE_SUBSCR_ADAPTIVE", "STORE_SUBSCR_DICT", "STORE_SUBSCR_LIST_INT",
    "UNPACK_SEQUENCE_ADAPTIVE", "UNPACK_SEQUENCE_LIST", "UNPACK_SEQUENCE_TUPLE",
    "UNPACK_SEQUENCE_TWO_TUPLE", "DO_TRACING",
    // instrumented forms
    "INSTRUMENTED_RESUME", "INSTRUMENTED_END_FOR", "INSTRUMENTED_END_SEND",
    "INSTRUMENTED_RETURN_VALUE", "INSTRUMENTED_RETURN_CONST", "INSTRUMENTED_YIELD_VALUE",
    "INSTRUMENTED_LOAD_SUPER_ATTR", "INSTRUMENTED_FOR_ITER", "INSTRUMENTED_CALL",
    "INSTRUMENTED_CALL_KW", "INSTRUMENTED_CALL_FUNCTION_EX", "INSTRUMENTED_INSTRUCTION",
    "INSTRUMENTED_JUMP_FORWARD", "INSTRUMENTED_JUMP_BACKWARD",
    "INSTRUMENTED_POP_JUMP_IF_FALSE", "INSTRUMENTED_POP_JUMP_IF_TRUE",
    "INSTRUMENTED_POP_JUMP_IF_NONE", "INSTRUMENTED_POP_JUMP_IF_NOT_NONE",
    "INSTRUMENTED_LINE",
    // PyPy
    "LOAD_REVDB_VAR",
];

static MNEMONIC_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The process-wide mnemonic set, built on first access.
pub fn mnemonic_set() -> &'static HashSet<&'static str> {
    MNEMONIC_SET.get_or_init(|| MNEMONICS.iter().copied().collect())
}

pub fn is_mnemonic(word: &str) -> bool {
    mnemonic_set().contains(word)
}

/// Sorted copy of the table, duplicates removed.
pub fn sorted() -> Vec<&'static str> {
    let mut ans: Vec<&'static str> = mnemonic_set().iter().copied().collect();
    ans.sort();
    ans
}
