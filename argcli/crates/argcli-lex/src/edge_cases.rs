//! Edge case tests for argcli-lex
