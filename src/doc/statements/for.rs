/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are numeric expressions.
## Purpose
Used with `NEXT` to repeat the lines between them
while counting through a sequence of numbers.

## Remarks
The three expressions are evaluated once, in order, when the `FOR`
runs. A string in any of them is a `TYPE MISMATCH`.
`STEP` defaults to 1. With a negative step the loop counts down.

The body always runs at least once, even when x is already past y.

Entering a `FOR` for a variable that already has an open loop
discards that loop and any loops opened inside it.

## Example
```text
10 FOR I=1 TO 7 STEP 3
20 PRINT "HELLO WORLD";I
30 NEXT I
RUN
HELLO WORLD 1
HELLO WORLD 4
HELLO WORLD 7
```

*/
