/*!
# `INPUT ["<prompt string>"(;|,)]<variable>`

## Purpose
Suspends execution and awaits a line from the terminal.

## Remarks
Without a prompt string, `? ` is shown.
If the line reads as a number the variable gets a number,
otherwise it gets the text as typed.
Running out of input is an `INPUT PAST END` error.

## Example
```text
10 INPUT "WHAT IS YOUR AGE? "; AGE
20 PRINT AGE + 1
```

*/
