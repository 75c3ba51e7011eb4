/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional. Any variable can hold a number or a string
and the type may change on a later assignment.
Names are case sensitive, so `A` and `a` are different variables.
Using a variable before anything was assigned to it is an
`UNDEFINED VARIABLE` error.

## Example
```text
10 A = 10
20 PRINT A
30 LET A = "TEN"
40 PRINT A
RUN
 10
TEN
```

*/
